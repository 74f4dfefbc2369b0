// Config Repository Port
//
// 配置存储仓储端口定义

use async_trait::async_trait;

use super::ConfigError;
use crate::modules::config::domain::PluginConfig;

/// 配置仓储端口 - 定义配置持久化抽象
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// 加载配置，不存在时返回默认配置
    async fn load(&self) -> Result<PluginConfig, ConfigError>;

    /// 保存配置
    async fn save(&self, config: &PluginConfig) -> Result<(), ConfigError>;

    /// 清除配置
    async fn clear(&self) -> Result<(), ConfigError>;

    /// 检查配置是否存在
    async fn exists(&self) -> Result<bool, ConfigError>;
}
