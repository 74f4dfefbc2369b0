// Config Domain Entities
//
// 插件配置实体定义

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 插件配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    /// 是否注册调试命令
    pub enable_debug_commands: bool,
    /// 数据目录，为空时使用内存存储
    pub data_dir: Option<PathBuf>,
    /// tracing 过滤表达式，例如 "info" 或 "usersurvey_lib=debug"
    pub log_filter: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enable_debug_commands: true,
            data_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl PluginConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并部分配置
    pub fn merge(&mut self, partial: PartialPluginConfig) {
        if let Some(enabled) = partial.enable_debug_commands {
            self.enable_debug_commands = enabled;
        }
        if let Some(data_dir) = partial.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(log_filter) = partial.log_filter {
            self.log_filter = log_filter;
        }
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.log_filter.trim().is_empty() {
            errors.push("logFilter must not be empty".to_string());
        }
        if let Some(ref dir) = self.data_dir {
            if dir.as_os_str().is_empty() {
                errors.push("dataDir must not be an empty path".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 部分配置（用于更新）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialPluginConfig {
    pub enable_debug_commands: Option<bool>,
    /// `Some(None)` 表示清除数据目录
    pub data_dir: Option<Option<PathBuf>>,
    pub log_filter: Option<String>,
}
