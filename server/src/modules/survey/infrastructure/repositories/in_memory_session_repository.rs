use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::survey::domain::{SessionId, SurveyId, SurveySession};
use crate::modules::survey::ports::{RepositoryError, SessionRepository};

/// 内存答卷会话仓储
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, SurveySession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted(mut sessions: Vec<SurveySession>) -> Vec<SurveySession> {
    sessions.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
    sessions
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get(&self, id: &SessionId) -> Result<Option<SurveySession>, RepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn save(&self, session: &SurveySession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id().clone(), session.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SurveySession>, RepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sorted(sessions.values().cloned().collect()))
    }

    async fn find_by_survey(
        &self,
        survey_id: &SurveyId,
    ) -> Result<Vec<SurveySession>, RepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sorted(
            sessions
                .values()
                .filter(|s| s.survey_id() == survey_id)
                .cloned()
                .collect(),
        ))
    }

    async fn delete_all(&self) -> Result<usize, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let deleted = sessions.len();
        sessions.clear();
        Ok(deleted)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }
}
