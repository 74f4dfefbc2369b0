// Config Service
//
// 配置服务门面，提供统一的 API

use async_trait::async_trait;
use std::sync::Arc;

use super::{
    CommandHandler, GetAllConfigHandler, GetAllConfigQuery, QueryHandler, ResetConfigCommand,
    ResetConfigHandler, UpdateConfigCommand, UpdateConfigHandler,
};
use crate::modules::config::domain::{PartialPluginConfig, PluginConfig};
use crate::modules::config::ports::{ConfigError, ConfigPort, ConfigRepository};

/// 配置服务实现
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
    // Handlers
    get_all_handler: GetAllConfigHandler,
    update_handler: UpdateConfigHandler,
    reset_handler: ResetConfigHandler,
}

impl ConfigService {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            get_all_handler: GetAllConfigHandler::new(repository.clone()),
            update_handler: UpdateConfigHandler::new(repository.clone()),
            reset_handler: ResetConfigHandler::new(repository.clone()),
            repository,
        }
    }

    /// 获取仓储引用
    pub fn repository(&self) -> &Arc<dyn ConfigRepository> {
        &self.repository
    }
}

#[async_trait]
impl ConfigPort for ConfigService {
    async fn get_all(&self) -> Result<PluginConfig, ConfigError> {
        let response = self.get_all_handler.handle(GetAllConfigQuery).await?;
        Ok(response.config)
    }

    async fn update(&self, partial: PartialPluginConfig) -> Result<PluginConfig, ConfigError> {
        let response = self
            .update_handler
            .handle(UpdateConfigCommand::new(partial))
            .await?;
        Ok(response.config)
    }

    async fn reset(&self) -> Result<PluginConfig, ConfigError> {
        let response = self.reset_handler.handle(ResetConfigCommand).await?;
        Ok(response.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::infrastructure::InMemoryConfigRepository;

    #[tokio::test]
    async fn test_config_service() {
        let repo = Arc::new(InMemoryConfigRepository::new());
        let service = ConfigService::new(repo);

        let config = service.get_all().await.unwrap();
        assert!(config.enable_debug_commands);

        let updated = service
            .update(PartialPluginConfig {
                enable_debug_commands: Some(false),
                log_filter: Some("warn".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!updated.enable_debug_commands);
        assert_eq!(updated.log_filter, "warn");

        let reset = service.reset().await.unwrap();
        assert_eq!(reset, PluginConfig::default());
    }
}
