// Survey Ports Layer
// 端口定义了模块与持久化存储之间的接口

mod session_repository;
mod survey_repository;

pub use session_repository::*;
pub use survey_repository::*;
