use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::survey::domain::{SurveyId, SurveySession};
use crate::modules::survey::ports::{SessionRepository, SurveyRepository};

/// 开始答卷会话命令
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub survey_id: SurveyId,
    pub user_id: String,
}

impl StartSessionCommand {
    pub fn new(survey_id: SurveyId, user_id: impl Into<String>) -> Self {
        Self {
            survey_id,
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StartSessionResponse {
    pub session: SurveySession,
}

/// 开始答卷会话命令处理器
pub struct StartSessionHandler {
    survey_repository: Arc<dyn SurveyRepository>,
    session_repository: Arc<dyn SessionRepository>,
}

impl StartSessionHandler {
    pub fn new(
        survey_repository: Arc<dyn SurveyRepository>,
        session_repository: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            survey_repository,
            session_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<StartSessionCommand, StartSessionResponse> for StartSessionHandler {
    async fn handle(
        &self,
        command: StartSessionCommand,
    ) -> Result<StartSessionResponse, ApplicationError> {
        if self.survey_repository.get(&command.survey_id).await?.is_none() {
            return Err(ApplicationError::SurveyNotFound(
                command.survey_id.to_string(),
            ));
        }

        let session = SurveySession::new(command.survey_id, command.user_id);
        self.session_repository.save(&session).await?;

        Ok(StartSessionResponse { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::survey::domain::Survey;
    use crate::modules::survey::infrastructure::{
        InMemorySessionRepository, InMemorySurveyRepository,
    };

    #[tokio::test]
    async fn test_start_session() {
        let survey_repo = Arc::new(InMemorySurveyRepository::new());
        let session_repo = Arc::new(InMemorySessionRepository::new());
        let handler = StartSessionHandler::new(survey_repo.clone(), session_repo.clone());

        let survey = Survey::new("NPS");
        survey_repo.save(&survey).await.unwrap();

        let response = handler
            .handle(StartSessionCommand::new(survey.id().clone(), "u1"))
            .await
            .unwrap();

        assert_eq!(response.session.user_id(), "u1");
        assert_eq!(session_repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unknown_survey() {
        let session_repo = Arc::new(InMemorySessionRepository::new());
        let handler = StartSessionHandler::new(
            Arc::new(InMemorySurveyRepository::new()),
            session_repo.clone(),
        );

        let result = handler
            .handle(StartSessionCommand::new(SurveyId::from("missing"), "u1"))
            .await;

        assert!(matches!(result, Err(ApplicationError::SurveyNotFound(_))));
        assert_eq!(session_repo.count().await.unwrap(), 0);
    }
}
