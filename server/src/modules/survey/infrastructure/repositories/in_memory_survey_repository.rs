use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::survey::domain::{Survey, SurveyId};
use crate::modules::survey::ports::{RepositoryError, SurveyRepository};

/// 内存问卷仓储
///
/// 用于开发和测试
pub struct InMemorySurveyRepository {
    surveys: RwLock<HashMap<SurveyId, Survey>>,
}

impl InMemorySurveyRepository {
    pub fn new() -> Self {
        Self {
            surveys: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySurveyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SurveyRepository for InMemorySurveyRepository {
    async fn get(&self, id: &SurveyId) -> Result<Option<Survey>, RepositoryError> {
        let surveys = self.surveys.read().await;
        Ok(surveys.get(id).cloned())
    }

    async fn save(&self, survey: &Survey) -> Result<(), RepositoryError> {
        let mut surveys = self.surveys.write().await;
        surveys.insert(survey.id().clone(), survey.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Survey>, RepositoryError> {
        let surveys = self.surveys.read().await;

        let mut all: Vec<Survey> = surveys.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        Ok(all)
    }

    async fn delete_all(&self) -> Result<usize, RepositoryError> {
        let mut surveys = self.surveys.write().await;
        let deleted = surveys.len();
        surveys.clear();
        Ok(deleted)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let surveys = self.surveys.read().await;
        Ok(surveys.len())
    }
}
