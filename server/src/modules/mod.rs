// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - config: 插件配置
// - host: 宿主平台端口（命令注册、用户查询）
// - survey: 问卷与答卷会话

pub mod config;
pub mod host;
pub mod survey;

pub use config::ConfigModule;
pub use survey::SurveyModule;
