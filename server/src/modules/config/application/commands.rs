// Config Commands
//
// 配置相关的命令处理器

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::config::domain::{PartialPluginConfig, PluginConfig};
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler<C> {
    type Output;
    type Error;

    async fn handle(&self, command: C) -> Result<Self::Output, Self::Error>;
}

// ============================================================================
// Update Config Command
// ============================================================================

/// 更新配置命令
#[derive(Debug, Clone)]
pub struct UpdateConfigCommand {
    pub partial: PartialPluginConfig,
}

impl UpdateConfigCommand {
    pub fn new(partial: PartialPluginConfig) -> Self {
        Self { partial }
    }
}

/// 更新配置响应
#[derive(Debug, Clone)]
pub struct UpdateConfigResponse {
    pub config: PluginConfig,
}

/// 更新配置命令处理器
pub struct UpdateConfigHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl UpdateConfigHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<UpdateConfigCommand> for UpdateConfigHandler {
    type Output = UpdateConfigResponse;
    type Error = ConfigError;

    async fn handle(&self, command: UpdateConfigCommand) -> Result<Self::Output, Self::Error> {
        let mut config = self.repository.load().await?;

        config.merge(command.partial);

        // 验证失败时不落盘
        config
            .validate()
            .map_err(|errors| ConfigError::ValidationError { errors })?;

        self.repository.save(&config).await?;

        Ok(UpdateConfigResponse { config })
    }
}

// ============================================================================
// Reset Config Command
// ============================================================================

/// 重置配置命令
#[derive(Debug, Clone)]
pub struct ResetConfigCommand;

/// 重置配置响应
#[derive(Debug, Clone)]
pub struct ResetConfigResponse {
    pub config: PluginConfig,
}

/// 重置配置命令处理器
pub struct ResetConfigHandler {
    repository: Arc<dyn ConfigRepository>,
}

impl ResetConfigHandler {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<ResetConfigCommand> for ResetConfigHandler {
    type Output = ResetConfigResponse;
    type Error = ConfigError;

    async fn handle(&self, _command: ResetConfigCommand) -> Result<Self::Output, Self::Error> {
        self.repository.clear().await?;
        let config = self.repository.load().await?;

        Ok(ResetConfigResponse { config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::infrastructure::InMemoryConfigRepository;

    #[tokio::test]
    async fn test_update_rejects_invalid_config() {
        let repo = Arc::new(InMemoryConfigRepository::new());
        let handler = UpdateConfigHandler::new(repo.clone());

        let result = handler
            .handle(UpdateConfigCommand::new(PartialPluginConfig {
                log_filter: Some(String::new()),
                ..Default::default()
            }))
            .await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        assert_eq!(repo.load().await.unwrap().log_filter, "info");
    }
}
