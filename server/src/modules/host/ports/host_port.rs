// Host Port
//
// 宿主平台 API 端口定义

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::host::domain::{CommandDefinition, User};

/// 宿主错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Command registration failed: {0}")]
    RegistrationFailed(String),

    #[error("Host unavailable: {0}")]
    Unavailable(String),
}

/// 宿主端口 - 插件可调用的宿主能力
#[async_trait]
pub trait HostApi: Send + Sync {
    /// 注册斜杠命令
    async fn register_command(&self, command: &CommandDefinition) -> Result<(), HostError>;

    /// 根据 ID 获取用户
    async fn get_user(&self, user_id: &str) -> Result<User, HostError>;
}
