// 文件持久化答卷会话仓储实现

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::survey::domain::{SessionId, SurveyId, SurveySession};
use crate::modules::survey::ports::{RepositoryError, SessionRepository};

const SESSIONS_FILE_NAME: &str = "sessions.json";

#[derive(Debug, Serialize, Deserialize, Default)]
struct SessionStore {
    sessions: HashMap<String, SurveySession>,
}

/// 文件持久化答卷会话仓储
pub struct FileSessionRepository {
    store: RwLock<SessionStore>,
    file_path: PathBuf,
}

impl FileSessionRepository {
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join(SESSIONS_FILE_NAME);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        }

        let store = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

            serde_json::from_str(&content)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
        } else {
            SessionStore::default()
        };

        Ok(Self {
            store: RwLock::new(store),
            file_path,
        })
    }

    async fn persist(&self, store: &SessionStore) -> Result<(), RepositoryError> {
        let content = serde_json::to_string_pretty(store)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.file_path, content)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn sorted<'a>(sessions: impl Iterator<Item = &'a SurveySession>) -> Vec<SurveySession> {
        let mut all: Vec<SurveySession> = sessions.cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        all
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn get(&self, id: &SessionId) -> Result<Option<SurveySession>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.sessions.get(id.as_str()).cloned())
    }

    async fn save(&self, session: &SurveySession) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let mut sessions = store.sessions.clone();
        sessions.insert(session.id().to_string(), session.clone());

        let next = SessionStore { sessions };
        self.persist(&next).await?;
        *store = next;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SurveySession>, RepositoryError> {
        let store = self.store.read().await;
        Ok(Self::sorted(store.sessions.values()))
    }

    async fn find_by_survey(
        &self,
        survey_id: &SurveyId,
    ) -> Result<Vec<SurveySession>, RepositoryError> {
        let store = self.store.read().await;
        Ok(Self::sorted(
            store
                .sessions
                .values()
                .filter(|s| s.survey_id() == survey_id),
        ))
    }

    async fn delete_all(&self) -> Result<usize, RepositoryError> {
        let mut store = self.store.write().await;
        let deleted = store.sessions.len();

        let next = SessionStore::default();
        self.persist(&next).await?;
        *store = next;
        Ok(deleted)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.sessions.len())
    }
}
