use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::SurveyId;

/// 问卷状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    #[default]
    Scheduled,
    InProgress,
    Ended,
}

/// 问卷实体 - 聚合根
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    id: SurveyId,
    title: String,
    status: SurveyStatus,
    created_at: DateTime<Utc>,
}

impl Survey {
    /// 创建新问卷（待开始）
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SurveyId::new(),
            title: title.into(),
            status: SurveyStatus::Scheduled,
            created_at: Utc::now(),
        }
    }

    /// 从已有数据恢复
    pub fn from_parts(
        id: SurveyId,
        title: impl Into<String>,
        status: SurveyStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> &SurveyId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> SurveyStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 开始收集，只有待开始的问卷可以开始
    pub fn start(&mut self) -> bool {
        if self.status != SurveyStatus::Scheduled {
            return false;
        }
        self.status = SurveyStatus::InProgress;
        true
    }

    /// 结束收集
    pub fn end(&mut self) {
        self.status = SurveyStatus::Ended;
    }

    pub fn is_accepting_responses(&self) -> bool {
        self.status == SurveyStatus::InProgress
    }
}
