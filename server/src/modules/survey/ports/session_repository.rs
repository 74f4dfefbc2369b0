use async_trait::async_trait;

use super::super::domain::{SessionId, SurveyId, SurveySession};
use super::RepositoryError;

/// 答卷会话仓储端口
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 根据 ID 获取会话
    async fn get(&self, id: &SessionId) -> Result<Option<SurveySession>, RepositoryError>;

    /// 保存会话
    async fn save(&self, session: &SurveySession) -> Result<(), RepositoryError>;

    /// 获取全部会话，按创建时间升序
    async fn find_all(&self) -> Result<Vec<SurveySession>, RepositoryError>;

    /// 获取某份问卷下的会话
    async fn find_by_survey(
        &self,
        survey_id: &SurveyId,
    ) -> Result<Vec<SurveySession>, RepositoryError>;

    /// 删除全部会话，返回删除数量
    async fn delete_all(&self) -> Result<usize, RepositoryError>;

    /// 获取会话总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}
