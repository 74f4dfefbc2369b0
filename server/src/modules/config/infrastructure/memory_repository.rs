// In-Memory Config Repository
//
// 基于内存的配置仓储实现（用于测试和开发）

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::config::domain::PluginConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 内存配置仓储
pub struct InMemoryConfigRepository {
    config: RwLock<PluginConfig>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self::with_config(PluginConfig::default())
    }

    pub fn with_config(config: PluginConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl Default for InMemoryConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<PluginConfig, ConfigError> {
        let config = self.config.read().await;
        Ok(config.clone())
    }

    async fn save(&self, config: &PluginConfig) -> Result<(), ConfigError> {
        let mut current = self.config.write().await;
        *current = config.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        let mut config = self.config.write().await;
        *config = PluginConfig::default();
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        // 内存仓储总是存在
        Ok(true)
    }
}
