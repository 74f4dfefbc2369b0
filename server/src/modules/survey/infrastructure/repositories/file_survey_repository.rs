// 文件持久化问卷仓储实现
//
// 使用 JSON 文件存储问卷数据

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::survey::domain::{Survey, SurveyId};
use crate::modules::survey::ports::{RepositoryError, SurveyRepository};

const SURVEYS_FILE_NAME: &str = "surveys.json";

/// 持久化数据结构
#[derive(Debug, Serialize, Deserialize, Default)]
struct SurveyStore {
    surveys: HashMap<String, Survey>,
}

/// 文件持久化问卷仓储
pub struct FileSurveyRepository {
    store: RwLock<SurveyStore>,
    file_path: PathBuf,
}

impl FileSurveyRepository {
    /// 创建新的文件问卷仓储
    ///
    /// # Arguments
    /// * `data_dir` - 插件数据目录路径
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join(SURVEYS_FILE_NAME);

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
            SurveyStore::default()
        };

        Ok(Self {
            store: RwLock::new(store),
            file_path,
        })
    }

    /// 将数据持久化到文件
    ///
    /// 调用方需持有写锁，写入成功后再替换内存数据
    async fn persist(&self, store: &SurveyStore) -> Result<(), RepositoryError> {
        let content = serde_json::to_string_pretty(store)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.file_path, content)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SurveyRepository for FileSurveyRepository {
    async fn get(&self, id: &SurveyId) -> Result<Option<Survey>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.surveys.get(id.as_str()).cloned())
    }

    async fn save(&self, survey: &Survey) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let mut surveys = store.surveys.clone();
        surveys.insert(survey.id().to_string(), survey.clone());

        let next = SurveyStore { surveys };
        self.persist(&next).await?;
        *store = next;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Survey>, RepositoryError> {
        let store = self.store.read().await;

        let mut all: Vec<Survey> = store.surveys.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        Ok(all)
    }

    async fn delete_all(&self) -> Result<usize, RepositoryError> {
        let mut store = self.store.write().await;
        let deleted = store.surveys.len();

        let next = SurveyStore::default();
        self.persist(&next).await?;
        *store = next;
        Ok(deleted)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.surveys.len())
    }
}
