// Config Module
//
// 插件配置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含插件配置实体
// - ports: 端口层，定义配置读写的抽象接口
// - infrastructure: 基础设施层，实现具体的配置存储适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{PartialPluginConfig, PluginConfig};

// Ports
pub use ports::{ConfigError, ConfigPort, ConfigRepository};

// Infrastructure
pub use infrastructure::{FileConfigRepository, InMemoryConfigRepository};

// Application
pub use application::{
    CommandHandler, ConfigService, GetAllConfigHandler, GetAllConfigQuery, GetAllConfigResponse,
    QueryHandler, ResetConfigCommand, ResetConfigHandler, ResetConfigResponse,
    UpdateConfigCommand, UpdateConfigHandler, UpdateConfigResponse,
};

use std::path::PathBuf;
use std::sync::Arc;

/// Config 模块容器
pub struct ConfigModule {
    service: ConfigService,
}

impl ConfigModule {
    /// 使用内存仓储创建（用于测试）
    pub fn new_in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryConfigRepository::new()))
    }

    /// 使用文件存储创建
    pub fn new_with_file(config_dir: PathBuf) -> Self {
        Self::with_repository(Arc::new(FileConfigRepository::new(config_dir)))
    }

    /// 使用自定义仓储创建
    pub fn with_repository(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            service: ConfigService::new(repository),
        }
    }

    /// 获取配置服务
    pub fn service(&self) -> &ConfigService {
        &self.service
    }

    /// 获取全部配置
    pub async fn get_all(&self) -> Result<PluginConfig, ConfigError> {
        self.service.get_all().await
    }

    /// 更新配置
    pub async fn update(&self, partial: PartialPluginConfig) -> Result<PluginConfig, ConfigError> {
        self.service.update(partial).await
    }

    /// 重置配置
    pub async fn reset(&self) -> Result<PluginConfig, ConfigError> {
        self.service.reset().await
    }
}
