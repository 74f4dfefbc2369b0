// Debug Commands - 调试用斜杠命令
//
// 向宿主注册 /resetdata、/listsurveys、/listsessions，
// 并把调用转发给问卷应用层与会话存储

use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::infrastructure::{EventBus, PluginEvent};
use crate::modules::host::{CommandArgs, CommandDefinition, CommandResponse, HostApi};
use crate::modules::survey::{ResetDataCommand, SessionRepository, SurveyModule};
use crate::shared::{AppError, AppResult};

pub const RESET_DATA_COMMAND: &str = "resetdata";
pub const LIST_SURVEYS_COMMAND: &str = "listsurveys";
pub const LIST_SESSIONS_COMMAND: &str = "listsessions";

const RESET_SUCCESS_TEXT: &str = "Successfully reset survey data";
const USER_LOOKUP_FAILED_TEXT: &str = "There was an error executing the command";
const NO_SURVEYS_TEXT: &str = "No surveys found.";
const NO_SESSIONS_TEXT: &str = "No sessions found.";

/// 调试命令的注册记录，按注册顺序排列
///
/// 第二项是日志与错误上下文中使用的命令名称
pub fn debug_command_definitions() -> Vec<(CommandDefinition, &'static str)> {
    vec![
        (
            CommandDefinition::new(RESET_DATA_COMMAND)
                .with_auto_complete("Reset all user survey data (system admins only)")
                .with_display_name("Reset survey data"),
            "reset data",
        ),
        (
            CommandDefinition::new(LIST_SURVEYS_COMMAND)
                .with_auto_complete("List the IDs of all surveys")
                .with_display_name("List surveys"),
            "list surveys",
        ),
        (
            CommandDefinition::new(LIST_SESSIONS_COMMAND)
                .with_auto_complete("List the IDs of all survey sessions")
                .with_display_name("List sessions"),
            "list sessions",
        ),
    ]
}

/// 调试命令分发器
pub struct DebugCommands {
    host: Arc<dyn HostApi>,
    /// 问卷应用层
    app: Arc<SurveyModule>,
    /// 会话存储
    store: Arc<dyn SessionRepository>,
    event_bus: EventBus,
}

impl DebugCommands {
    pub fn new(
        host: Arc<dyn HostApi>,
        app: Arc<SurveyModule>,
        store: Arc<dyn SessionRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            host,
            app,
            store,
            event_bus,
        }
    }

    /// 向宿主注册全部调试命令
    ///
    /// # Errors
    /// 第一个注册失败的命令会中止注册，并以带上下文的错误返回
    pub async fn register(&self) -> AppResult<()> {
        for (definition, name) in debug_command_definitions() {
            if let Err(e) = self.host.register_command(&definition).await {
                error!(
                    trigger = %definition.trigger,
                    error = %e,
                    "failed to register {} command",
                    name
                );
                return Err(AppError::CommandRegistration {
                    context: format!("failed to register {} command", name),
                    source: e,
                });
            }

            debug!(trigger = %definition.trigger, "Registered debug command");
            self.event_bus.publish(PluginEvent::CommandRegistered {
                trigger: definition.trigger,
            });
        }

        Ok(())
    }

    /// 执行命令
    ///
    /// 空命令或未知命令返回 `Ok(None)`
    pub async fn execute(&self, args: &CommandArgs) -> AppResult<Option<CommandResponse>> {
        let tokens = args.tokens();
        let Some(first) = tokens.first() else {
            return Ok(None);
        };

        let response = match first.strip_prefix('/') {
            Some(RESET_DATA_COMMAND) => self.execute_reset_data(args).await,
            Some(LIST_SURVEYS_COMMAND) => self.execute_list_surveys().await,
            Some(LIST_SESSIONS_COMMAND) => self.execute_list_sessions().await,
            _ => return Ok(None),
        };

        Ok(Some(response))
    }

    async fn execute_reset_data(&self, args: &CommandArgs) -> CommandResponse {
        let user = match self.host.get_user(&args.user_id).await {
            Ok(user) => user,
            Err(e) => {
                error!(user_id = %args.user_id, error = %e, "failed to get user by id");
                return CommandResponse::text(USER_LOOKUP_FAILED_TEXT);
            }
        };

        if !user.is_system_admin() {
            return CommandResponse::empty();
        }

        warn!(
            user_id = %args.user_id,
            "Processing request to reset all user survey data. Requested by user ID: {}",
            args.user_id
        );

        match self
            .app
            .reset_data(ResetDataCommand::new(args.user_id.clone()))
            .await
        {
            Ok(result) => {
                self.event_bus.publish(PluginEvent::DataReset {
                    requested_by: args.user_id.clone(),
                    deleted_surveys: result.deleted_surveys,
                    deleted_sessions: result.deleted_sessions,
                });
                CommandResponse::text(RESET_SUCCESS_TEXT)
            }
            Err(e) => CommandResponse::text(e.to_string()),
        }
    }

    async fn execute_list_surveys(&self) -> CommandResponse {
        let surveys = match self.app.get_surveys().await {
            Ok(surveys) => surveys,
            Err(e) => return CommandResponse::text(format!("Failed to list surveys: {}", e)),
        };

        if surveys.is_empty() {
            return CommandResponse::text(NO_SURVEYS_TEXT);
        }

        CommandResponse::text(format!(
            "Survey IDs: {}",
            join_ids(surveys.iter().map(|s| s.id()))
        ))
    }

    async fn execute_list_sessions(&self) -> CommandResponse {
        let sessions = match self.store.find_all().await {
            Ok(sessions) => sessions,
            Err(e) => return CommandResponse::text(format!("Failed to list sessions: {}", e)),
        };

        if sessions.is_empty() {
            return CommandResponse::text(NO_SESSIONS_TEXT);
        }

        CommandResponse::text(format!(
            "Session IDs: {}",
            join_ids(sessions.iter().map(|s| s.id()))
        ))
    }
}

fn join_ids<T: Display>(ids: impl Iterator<Item = T>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::modules::host::{HostError, InMemoryHost, User};
    use crate::modules::survey::{
        InMemorySessionRepository, InMemorySurveyRepository, RepositoryError, SessionId, Survey,
        SurveyId, SurveyRepository, SurveySession, SurveyStatus,
    };

    /// 所有操作都失败的仓储
    struct BrokenStore;

    #[async_trait]
    impl SurveyRepository for BrokenStore {
        async fn get(&self, _id: &SurveyId) -> Result<Option<Survey>, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn save(&self, _survey: &Survey) -> Result<(), RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn find_all(&self) -> Result<Vec<Survey>, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn delete_all(&self) -> Result<usize, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn count(&self) -> Result<usize, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
    }

    #[async_trait]
    impl SessionRepository for BrokenStore {
        async fn get(&self, _id: &SessionId) -> Result<Option<SurveySession>, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn save(&self, _session: &SurveySession) -> Result<(), RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn find_all(&self) -> Result<Vec<SurveySession>, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn find_by_survey(
            &self,
            _survey_id: &SurveyId,
        ) -> Result<Vec<SurveySession>, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn delete_all(&self) -> Result<usize, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
        async fn count(&self) -> Result<usize, RepositoryError> {
            Err(RepositoryError::DatabaseError("disk full".to_string()))
        }
    }

    struct Fixture {
        host: Arc<InMemoryHost>,
        surveys: Arc<dyn SurveyRepository>,
        sessions: Arc<dyn SessionRepository>,
        event_bus: EventBus,
        commands: DebugCommands,
    }

    async fn fixture_with(
        surveys: Arc<dyn SurveyRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Fixture {
        let host = Arc::new(InMemoryHost::new());
        host.add_user(User::new("admin", "root", "system_user system_admin")).await;
        host.add_user(User::new("member", "bob", "system_user")).await;

        let app = Arc::new(SurveyModule::with_repositories(
            surveys.clone(),
            sessions.clone(),
        ));
        let event_bus = EventBus::new();
        let commands = DebugCommands::new(
            host.clone(),
            app,
            sessions.clone(),
            event_bus.clone(),
        );

        Fixture {
            host,
            surveys,
            sessions,
            event_bus,
            commands,
        }
    }

    async fn fixture() -> Fixture {
        fixture_with(
            Arc::new(InMemorySurveyRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
        )
        .await
    }

    async fn run(fixture: &Fixture, command: &str, user_id: &str) -> Option<CommandResponse> {
        fixture
            .commands
            .execute(&CommandArgs::new(command, user_id))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_all_commands_in_order() {
        let f = fixture().await;
        let mut events = f.event_bus.subscribe();

        f.commands.register().await.unwrap();

        let commands = f.host.registered_commands().await;
        let triggers: Vec<&str> = commands.iter().map(|c| c.trigger.as_str()).collect();
        assert_eq!(triggers, vec!["resetdata", "listsurveys", "listsessions"]);
        assert!(commands.iter().all(|c| c.auto_complete));

        assert_eq!(
            events.recv().await.unwrap(),
            PluginEvent::CommandRegistered {
                trigger: "resetdata".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_register_stops_at_first_failure() {
        let f = fixture().await;
        f.host.fail_registration_for(LIST_SURVEYS_COMMAND).await;

        let err = f.commands.register().await.unwrap_err();

        match err {
            AppError::CommandRegistration { context, source } => {
                assert_eq!(context, "failed to register list surveys command");
                assert!(matches!(source, HostError::RegistrationFailed(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let triggers: Vec<String> = f
            .host
            .registered_commands()
            .await
            .into_iter()
            .map(|c| c.trigger)
            .collect();
        assert_eq!(triggers, vec!["resetdata"]);
    }

    #[tokio::test]
    async fn test_empty_and_unknown_commands() {
        let f = fixture().await;

        assert!(run(&f, "", "admin").await.is_none());
        assert!(run(&f, "   \t ", "admin").await.is_none());
        assert!(run(&f, "/unknown", "admin").await.is_none());
        assert!(run(&f, "listsurveys", "admin").await.is_none());
        assert!(run(&f, "/listsurveysx", "admin").await.is_none());
    }

    #[tokio::test]
    async fn test_reset_ignored_for_non_admin() {
        let f = fixture().await;
        f.surveys.save(&Survey::new("Keep me")).await.unwrap();

        let response = run(&f, "/resetdata", "member").await.unwrap();

        assert!(response.is_empty());
        assert_eq!(f.surveys.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reset_by_admin() {
        let f = fixture().await;
        let mut events = f.event_bus.subscribe();

        let survey = Survey::new("NPS");
        f.surveys.save(&survey).await.unwrap();
        f.sessions
            .save(&SurveySession::new(survey.id().clone(), "member"))
            .await
            .unwrap();

        let response = run(&f, "/resetdata", "admin").await.unwrap();

        assert_eq!(response.text, "Successfully reset survey data");
        assert_eq!(f.surveys.count().await.unwrap(), 0);
        assert_eq!(f.sessions.count().await.unwrap(), 0);
        assert_eq!(
            events.recv().await.unwrap(),
            PluginEvent::DataReset {
                requested_by: "admin".to_string(),
                deleted_surveys: 1,
                deleted_sessions: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_reset_failure_returns_error_text() {
        let broken = Arc::new(BrokenStore);
        let f = fixture_with(broken.clone(), broken).await;

        let response = run(&f, "/resetdata extra args", "admin").await.unwrap();

        assert_eq!(response.text, "Repository error: Database error: disk full");
        assert!(!response.text.contains("Successfully"));
    }

    #[tokio::test]
    async fn test_reset_with_unknown_user() {
        let f = fixture().await;
        f.surveys.save(&Survey::new("Keep me")).await.unwrap();

        let response = run(&f, "/resetdata", "ghost").await.unwrap();

        assert_eq!(response.text, "There was an error executing the command");
        assert_eq!(f.surveys.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_surveys() {
        let f = fixture().await;

        let response = run(&f, "/listsurveys", "member").await.unwrap();
        assert_eq!(response.text, "No surveys found.");

        let now = Utc::now();
        for id in ["b", "a"] {
            f.surveys
                .save(&Survey::from_parts(
                    id.into(),
                    id,
                    SurveyStatus::InProgress,
                    now,
                ))
                .await
                .unwrap();
        }

        let response = run(&f, "/listsurveys", "member").await.unwrap();
        assert_eq!(response.text, "Survey IDs: a, b");
    }

    #[tokio::test]
    async fn test_list_sessions() {
        let f = fixture().await;

        let response = run(&f, "/listsessions", "member").await.unwrap();
        assert_eq!(response.text, "No sessions found.");

        f.sessions
            .save(&SurveySession::from_parts(
                "x".into(),
                "a".into(),
                "member",
                Utc::now(),
            ))
            .await
            .unwrap();

        let response = run(&f, "/listsessions", "member").await.unwrap();
        assert_eq!(response.text, "Session IDs: x");
    }

    #[tokio::test]
    async fn test_list_failures() {
        let broken = Arc::new(BrokenStore);
        let f = fixture_with(broken.clone(), broken).await;

        let surveys = run(&f, "/listsurveys", "member").await.unwrap();
        assert_eq!(
            surveys.text,
            "Failed to list surveys: Repository error: Database error: disk full"
        );

        let sessions = run(&f, "/listsessions", "member").await.unwrap();
        assert_eq!(
            sessions.text,
            "Failed to list sessions: Database error: disk full"
        );
    }
}
