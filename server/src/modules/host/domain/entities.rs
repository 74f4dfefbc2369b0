// Host Domain Entities
//
// 宿主平台模型定义

use serde::{Deserialize, Serialize};

/// 系统管理员角色名
pub const SYSTEM_ADMIN_ROLE: &str = "system_admin";

/// 宿主平台用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// 以空白分隔的角色列表，例如 "system_user system_admin"
    pub roles: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        roles: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            roles: roles.into(),
        }
    }

    /// 是否拥有指定角色
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.split_whitespace().any(|r| r == role)
    }

    /// 是否为系统管理员
    pub fn is_system_admin(&self) -> bool {
        self.has_role(SYSTEM_ADMIN_ROLE)
    }
}

/// 斜杠命令注册记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// 触发词（不含前导 `/`）
    pub trigger: String,
    pub auto_complete: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auto_complete_desc: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auto_complete_hint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
}

impl CommandDefinition {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            ..Default::default()
        }
    }

    pub fn with_auto_complete(mut self, desc: impl Into<String>) -> Self {
        self.auto_complete = true;
        self.auto_complete_desc = desc.into();
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}

/// 宿主传入的命令调用参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArgs {
    /// 用户输入的完整命令文本，例如 "/listsurveys"
    pub command: String,
    pub user_id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub team_id: String,
}

impl CommandArgs {
    pub fn new(command: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    /// 按空白切分命令文本
    pub fn tokens(&self) -> Vec<&str> {
        self.command.split_whitespace().collect()
    }
}

/// 响应可见范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    #[default]
    Ephemeral,
    InChannel,
}

/// 命令响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub response_type: ResponseType,
}

impl CommandResponse {
    /// 仅包含文本的临时响应
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            response_type: ResponseType::Ephemeral,
        }
    }

    /// 空响应（命令被静默忽略）
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
