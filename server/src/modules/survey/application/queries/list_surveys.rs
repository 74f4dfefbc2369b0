use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::survey::domain::Survey;
use crate::modules::survey::ports::SurveyRepository;

/// 列出问卷查询
#[derive(Debug, Clone, Default)]
pub struct ListSurveysQuery;

/// 列出问卷响应
#[derive(Debug, Clone)]
pub struct ListSurveysResponse {
    pub surveys: Vec<Survey>,
}

/// 列出问卷查询处理器
pub struct ListSurveysHandler {
    survey_repository: Arc<dyn SurveyRepository>,
}

impl ListSurveysHandler {
    pub fn new(survey_repository: Arc<dyn SurveyRepository>) -> Self {
        Self { survey_repository }
    }
}

#[async_trait]
impl QueryHandler<ListSurveysQuery, ListSurveysResponse> for ListSurveysHandler {
    async fn handle(
        &self,
        _query: ListSurveysQuery,
    ) -> Result<ListSurveysResponse, ApplicationError> {
        let surveys = self.survey_repository.find_all().await?;
        Ok(ListSurveysResponse { surveys })
    }
}
