// Survey Commands - 命令定义和处理器

mod create_survey;
mod reset_data;
mod start_session;

pub use create_survey::*;
pub use reset_data::*;
pub use start_session::*;
