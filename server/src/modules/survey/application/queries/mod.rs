// Survey Queries - 查询定义和处理器

mod list_sessions;
mod list_surveys;

pub use list_sessions::*;
pub use list_surveys::*;
