use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::{SessionId, SurveyId};

/// 答卷会话实体
///
/// 记录某个用户参与某份问卷的一次会话
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySession {
    id: SessionId,
    survey_id: SurveyId,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl SurveySession {
    pub fn new(survey_id: SurveyId, user_id: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            survey_id,
            user_id: user_id.into(),
            created_at: Utc::now(),
        }
    }

    /// 从已有数据恢复
    pub fn from_parts(
        id: SessionId,
        survey_id: SurveyId,
        user_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            survey_id,
            user_id: user_id.into(),
            created_at,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn survey_id(&self) -> &SurveyId {
        &self.survey_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
