use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use super::super::{ApplicationError, CommandHandler};
use crate::modules::survey::ports::{SessionRepository, SurveyRepository};

/// 重置全部问卷数据命令
#[derive(Debug, Clone)]
pub struct ResetDataCommand {
    /// 发起重置的用户 ID
    pub requested_by: String,
}

impl ResetDataCommand {
    pub fn new(requested_by: impl Into<String>) -> Self {
        Self {
            requested_by: requested_by.into(),
        }
    }
}

/// 重置命令响应
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetDataResponse {
    pub deleted_surveys: usize,
    pub deleted_sessions: usize,
}

/// 重置命令处理器
pub struct ResetDataHandler {
    survey_repository: Arc<dyn SurveyRepository>,
    session_repository: Arc<dyn SessionRepository>,
}

impl ResetDataHandler {
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
impl CommandHandler<ResetDataCommand, ResetDataResponse> for ResetDataHandler {
    async fn handle(
        &self,
        command: ResetDataCommand,
    ) -> Result<ResetDataResponse, ApplicationError> {
        // 先删除会话，再删除其引用的问卷
        let sessions = self.session_repository.find_all().await?;
        let deleted_sessions = self.session_repository.delete_all().await?;

        let deleted_surveys = match self.survey_repository.delete_all().await {
            Ok(deleted) => deleted,
            Err(e) => {
                // 问卷删除失败时恢复已删除的会话
                for session in &sessions {
                    if let Err(restore_err) = self.session_repository.save(session).await {
                        error!(
                            session_id = %session.id(),
                            error = %restore_err,
                            "Failed to restore session after aborted reset"
                        );
                    }
                }
                return Err(e.into());
            }
        };

        info!(
            requested_by = %command.requested_by,
            deleted_surveys,
            deleted_sessions,
            "Survey data reset"
        );

        Ok(ResetDataResponse {
            deleted_surveys,
            deleted_sessions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::survey::domain::{Survey, SurveySession};
    use crate::modules::survey::infrastructure::{
        InMemorySessionRepository, InMemorySurveyRepository,
    };

    #[tokio::test]
    async fn test_reset_removes_everything() {
        let survey_repo = Arc::new(InMemorySurveyRepository::new());
        let session_repo = Arc::new(InMemorySessionRepository::new());
        let handler = ResetDataHandler::new(survey_repo.clone(), session_repo.clone());

        let survey = Survey::new("NPS");
        survey_repo.save(&survey).await.unwrap();
        session_repo
            .save(&SurveySession::new(survey.id().clone(), "u1"))
            .await
            .unwrap();
        session_repo
            .save(&SurveySession::new(survey.id().clone(), "u2"))
            .await
            .unwrap();

        let response = handler
            .handle(ResetDataCommand::new("admin"))
            .await
            .unwrap();

        assert_eq!(
            response,
            ResetDataResponse {
                deleted_surveys: 1,
                deleted_sessions: 2,
            }
        );
        assert_eq!(survey_repo.count().await.unwrap(), 0);
        assert_eq!(session_repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_reset_empty_store() {
        let handler = ResetDataHandler::new(
            Arc::new(InMemorySurveyRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
        );

        let response = handler
            .handle(ResetDataCommand::new("admin"))
            .await
            .unwrap();
        assert_eq!(response.deleted_surveys, 0);
        assert_eq!(response.deleted_sessions, 0);
    }

    #[tokio::test]
    async fn test_failed_survey_delete_restores_sessions() {
        use crate::modules::survey::infrastructure::{
            FileSessionRepository, FileSurveyRepository,
        };

        let temp_dir = tempfile::TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();
        let survey_repo = Arc::new(FileSurveyRepository::new(data_dir.clone()).await.unwrap());
        let session_repo = Arc::new(FileSessionRepository::new(data_dir.clone()).await.unwrap());
        let handler = ResetDataHandler::new(survey_repo.clone(), session_repo.clone());

        let survey = Survey::new("NPS");
        survey_repo.save(&survey).await.unwrap();
        session_repo
            .save(&SurveySession::new(survey.id().clone(), "u1"))
            .await
            .unwrap();

        // 问卷文件被目录占据，写入会失败
        let surveys_file = data_dir.join("surveys.json");
        std::fs::remove_file(&surveys_file).unwrap();
        std::fs::create_dir(&surveys_file).unwrap();

        let result = handler.handle(ResetDataCommand::new("admin")).await;
        assert!(matches!(result, Err(ApplicationError::RepositoryError(_))));
        assert_eq!(survey_repo.count().await.unwrap(), 1);
        assert_eq!(session_repo.count().await.unwrap(), 1);

        let reopened = FileSessionRepository::new(data_dir).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
    }
}
