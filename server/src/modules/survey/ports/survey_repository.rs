use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::{Survey, SurveyId};

/// 仓储错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 问卷仓储端口
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// 根据 ID 获取问卷
    async fn get(&self, id: &SurveyId) -> Result<Option<Survey>, RepositoryError>;

    /// 保存问卷（创建或更新）
    async fn save(&self, survey: &Survey) -> Result<(), RepositoryError>;

    /// 获取全部问卷，按创建时间升序
    async fn find_all(&self) -> Result<Vec<Survey>, RepositoryError>;

    /// 删除全部问卷，返回删除数量
    async fn delete_all(&self) -> Result<usize, RepositoryError>;

    /// 获取问卷总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}
