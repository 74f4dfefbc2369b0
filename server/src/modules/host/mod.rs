// Host Module - 宿主平台模块
//
// 插件运行在聊天平台宿主进程中，本模块抽象宿主提供的能力：
// - domain: 宿主模型（用户、命令定义、命令参数与响应）
// - ports: 宿主 API 端口
// - infrastructure: 端口的内存实现（开发与测试）

pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use domain::{CommandArgs, CommandDefinition, CommandResponse, ResponseType, User};
pub use infrastructure::InMemoryHost;
pub use ports::{HostApi, HostError};
