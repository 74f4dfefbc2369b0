// Survey Module - 问卷模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含问卷、答卷会话实体和值对象
// - ports: 端口层，定义仓储接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    // Traits
    ApplicationError,
    CommandHandler,
    // Commands
    CreateSurveyCommand,
    CreateSurveyHandler,
    CreateSurveyResponse,
    // Queries
    ListSessionsHandler,
    ListSessionsQuery,
    ListSessionsResponse,
    ListSurveysHandler,
    ListSurveysQuery,
    ListSurveysResponse,
    QueryHandler,
    ResetDataCommand,
    ResetDataHandler,
    ResetDataResponse,
    StartSessionCommand,
    StartSessionHandler,
    StartSessionResponse,
};

pub use domain::{SessionId, Survey, SurveyId, SurveySession, SurveyStatus};

pub use infrastructure::{
    FileSessionRepository, FileSurveyRepository, InMemorySessionRepository,
    InMemorySurveyRepository,
};

pub use ports::{RepositoryError, SessionRepository, SurveyRepository};

use std::path::PathBuf;
use std::sync::Arc;

/// Survey 模块容器
///
/// 管理模块内的依赖注入，对外提供问卷应用层门面
pub struct SurveyModule {
    // Repositories
    survey_repository: Arc<dyn SurveyRepository>,
    session_repository: Arc<dyn SessionRepository>,
    // Handlers
    reset_data_handler: ResetDataHandler,
    create_survey_handler: CreateSurveyHandler,
    start_session_handler: StartSessionHandler,
    list_surveys_handler: ListSurveysHandler,
    list_sessions_handler: ListSessionsHandler,
}

impl SurveyModule {
    /// 创建内存存储的实例（用于开发测试）
    pub fn new() -> Self {
        Self::with_repositories(
            Arc::new(InMemorySurveyRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
        )
    }

    /// 创建带持久化存储的实例
    ///
    /// # Arguments
    /// * `data_dir` - 插件数据目录路径
    ///
    /// # Errors
    /// 如果无法初始化文件存储，返回错误
    pub async fn new_with_persistence(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let survey_repository: Arc<dyn SurveyRepository> =
            Arc::new(FileSurveyRepository::new(data_dir.clone()).await?);
        let session_repository: Arc<dyn SessionRepository> =
            Arc::new(FileSessionRepository::new(data_dir).await?);

        Ok(Self::with_repositories(
            survey_repository,
            session_repository,
        ))
    }

    /// 使用自定义仓储创建
    pub fn with_repositories(
        survey_repository: Arc<dyn SurveyRepository>,
        session_repository: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            reset_data_handler: ResetDataHandler::new(
                survey_repository.clone(),
                session_repository.clone(),
            ),
            create_survey_handler: CreateSurveyHandler::new(survey_repository.clone()),
            start_session_handler: StartSessionHandler::new(
                survey_repository.clone(),
                session_repository.clone(),
            ),
            list_surveys_handler: ListSurveysHandler::new(survey_repository.clone()),
            list_sessions_handler: ListSessionsHandler::new(session_repository.clone()),
            survey_repository,
            session_repository,
        }
    }

    // Command handlers

    /// 重置全部问卷数据
    pub async fn reset_data(
        &self,
        command: ResetDataCommand,
    ) -> Result<ResetDataResponse, ApplicationError> {
        self.reset_data_handler.handle(command).await
    }

    /// 创建问卷
    pub async fn create_survey(
        &self,
        command: CreateSurveyCommand,
    ) -> Result<CreateSurveyResponse, ApplicationError> {
        self.create_survey_handler.handle(command).await
    }

    /// 开始答卷会话
    pub async fn start_session(
        &self,
        command: StartSessionCommand,
    ) -> Result<StartSessionResponse, ApplicationError> {
        self.start_session_handler.handle(command).await
    }

    // Query handlers

    /// 获取全部问卷
    pub async fn get_surveys(&self) -> Result<Vec<Survey>, ApplicationError> {
        let response = self.list_surveys_handler.handle(ListSurveysQuery).await?;
        Ok(response.surveys)
    }

    /// 列出答卷会话
    pub async fn list_sessions(
        &self,
        query: ListSessionsQuery,
    ) -> Result<ListSessionsResponse, ApplicationError> {
        self.list_sessions_handler.handle(query).await
    }

    // Accessors

    /// 获取问卷仓储
    pub fn survey_repository(&self) -> &Arc<dyn SurveyRepository> {
        &self.survey_repository
    }

    /// 获取会话仓储
    pub fn session_repository(&self) -> &Arc<dyn SessionRepository> {
        &self.session_repository
    }
}

impl Default for SurveyModule {
    fn default() -> Self {
        Self::new()
    }
}
