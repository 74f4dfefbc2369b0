use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::host::domain::{CommandDefinition, User};
use crate::modules::host::ports::{HostApi, HostError};

/// 内存宿主
///
/// 用于开发和测试，记录已注册的命令并提供固定的用户目录
pub struct InMemoryHost {
    users: RwLock<HashMap<String, User>>,
    commands: RwLock<Vec<CommandDefinition>>,
    /// 注册时会失败的触发词
    failing_trigger: RwLock<Option<String>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            commands: RwLock::new(Vec::new()),
            failing_trigger: RwLock::new(None),
        }
    }

    /// 添加用户
    pub async fn add_user(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user);
    }

    /// 让指定触发词的注册失败
    pub async fn fail_registration_for(&self, trigger: impl Into<String>) {
        let mut failing = self.failing_trigger.write().await;
        *failing = Some(trigger.into());
    }

    /// 已注册的命令（按注册顺序）
    pub async fn registered_commands(&self) -> Vec<CommandDefinition> {
        self.commands.read().await.clone()
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostApi for InMemoryHost {
    async fn register_command(&self, command: &CommandDefinition) -> Result<(), HostError> {
        if let Some(trigger) = self.failing_trigger.read().await.as_deref() {
            if trigger == command.trigger {
                return Err(HostError::RegistrationFailed(format!(
                    "trigger {} rejected",
                    command.trigger
                )));
            }
        }

        let mut commands = self.commands.write().await;
        if commands.iter().any(|c| c.trigger == command.trigger) {
            return Err(HostError::RegistrationFailed(format!(
                "trigger {} already registered",
                command.trigger
            )));
        }
        commands.push(command.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<User, HostError> {
        let users = self.users.read().await;
        users
            .get(user_id)
            .cloned()
            .ok_or_else(|| HostError::UserNotFound(user_id.to_string()))
    }
}
