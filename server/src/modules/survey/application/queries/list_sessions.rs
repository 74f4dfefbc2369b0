use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::survey::domain::{SurveyId, SurveySession};
use crate::modules::survey::ports::SessionRepository;

/// 列出答卷会话查询
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    /// 仅列出某份问卷的会话
    pub survey_id: Option<SurveyId>,
}

impl ListSessionsQuery {
    pub fn for_survey(survey_id: SurveyId) -> Self {
        Self {
            survey_id: Some(survey_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListSessionsResponse {
    pub sessions: Vec<SurveySession>,
}

/// 列出答卷会话查询处理器
pub struct ListSessionsHandler {
    session_repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }
}

#[async_trait]
impl QueryHandler<ListSessionsQuery, ListSessionsResponse> for ListSessionsHandler {
    async fn handle(
        &self,
        query: ListSessionsQuery,
    ) -> Result<ListSessionsResponse, ApplicationError> {
        let sessions = match query.survey_id {
            Some(ref survey_id) => self.session_repository.find_by_survey(survey_id).await?,
            None => self.session_repository.find_all().await?,
        };
        Ok(ListSessionsResponse { sessions })
    }
}
