use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 问卷唯一标识符
///
/// 值对象：宿主平台的 ID 是不透明字符串，这里原样保存
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyId(String);

impl SurveyId {
    /// 生成新的问卷 ID（无连字符的 UUID v4）
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SurveyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SurveyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SurveyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_simple_uuid() {
        let id = SurveyId::new();
        assert_eq!(id.as_str().len(), 32);
        assert!(!id.as_str().contains('-'));
        assert_ne!(id, SurveyId::new());
    }

    #[test]
    fn test_external_id_kept_verbatim() {
        let id = SurveyId::from("a");
        assert_eq!(id.to_string(), "a");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a\"");
    }
}
