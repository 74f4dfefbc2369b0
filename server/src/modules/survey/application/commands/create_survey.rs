use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::survey::domain::Survey;
use crate::modules::survey::ports::SurveyRepository;

/// 创建问卷命令
#[derive(Debug, Clone)]
pub struct CreateSurveyCommand {
    pub title: String,
}

impl CreateSurveyCommand {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSurveyResponse {
    pub survey: Survey,
}

/// 创建问卷命令处理器
pub struct CreateSurveyHandler {
    survey_repository: Arc<dyn SurveyRepository>,
}

impl CreateSurveyHandler {
    pub fn new(survey_repository: Arc<dyn SurveyRepository>) -> Self {
        Self { survey_repository }
    }
}

#[async_trait]
impl CommandHandler<CreateSurveyCommand, CreateSurveyResponse> for CreateSurveyHandler {
    async fn handle(
        &self,
        command: CreateSurveyCommand,
    ) -> Result<CreateSurveyResponse, ApplicationError> {
        let title = command.title.trim();
        if title.is_empty() {
            return Err(ApplicationError::ValidationError(
                "survey title must not be empty".to_string(),
            ));
        }

        let survey = Survey::new(title);
        self.survey_repository.save(&survey).await?;

        Ok(CreateSurveyResponse { survey })
    }
}
