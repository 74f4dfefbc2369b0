pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use commands::DebugCommands;
use infrastructure::EventBus;
use modules::host::{CommandArgs, CommandResponse, HostApi};
use modules::{ConfigModule, SurveyModule};
use shared::AppResult;

/// 初始化日志
///
/// 重复初始化（例如插件重新激活）时保留已有的订阅者
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?}: {}, falling back to info", filter, e);
        EnvFilter::new("info")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

/// 插件容器
///
/// 持有宿主端口与各业务模块，激活后负责命令分发
pub struct Plugin {
    host: Arc<dyn HostApi>,
    config_module: ConfigModule,
    event_bus: EventBus,
    survey_module: Option<Arc<SurveyModule>>,
    debug_commands: Option<DebugCommands>,
}

impl Plugin {
    pub fn new(host: Arc<dyn HostApi>, config_module: ConfigModule) -> Self {
        Self {
            host,
            config_module,
            event_bus: EventBus::new(),
            survey_module: None,
            debug_commands: None,
        }
    }

    /// 插件激活
    ///
    /// 加载配置、初始化日志、构建问卷模块并注册调试命令
    pub async fn on_activate(&mut self) -> AppResult<()> {
        let config = self.config_module.get_all().await?;
        init_tracing(&config.log_filter);

        tracing::info!("User survey plugin activating...");

        let survey_module = match config.data_dir {
            Some(ref data_dir) => {
                tracing::info!("Plugin data directory: {:?}", data_dir);
                SurveyModule::new_with_persistence(data_dir.clone()).await?
            }
            None => {
                tracing::warn!("No data directory configured, survey data is kept in memory");
                SurveyModule::new()
            }
        };
        let survey_module = Arc::new(survey_module);
        self.survey_module = Some(survey_module.clone());

        if !config.enable_debug_commands {
            tracing::info!("Debug commands disabled by configuration");
            return Ok(());
        }

        let store = survey_module.session_repository().clone();
        let debug_commands = DebugCommands::new(
            self.host.clone(),
            survey_module,
            store,
            self.event_bus.clone(),
        );
        debug_commands.register().await?;
        self.debug_commands = Some(debug_commands);
        Ok(())
    }

    /// 宿主转发的斜杠命令
    ///
    /// 激活前或调试命令被禁用时返回 `Ok(None)`
    pub async fn execute_command(&self, args: &CommandArgs) -> AppResult<Option<CommandResponse>> {
        match self.debug_commands {
            Some(ref commands) => commands.execute(args).await,
            None => Ok(None),
        }
    }

    /// 问卷模块，激活后可用
    pub fn survey_module(&self) -> Option<&Arc<SurveyModule>> {
        self.survey_module.as_ref()
    }

    /// 插件事件总线
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn config_module(&self) -> &ConfigModule {
        &self.config_module
    }
}
