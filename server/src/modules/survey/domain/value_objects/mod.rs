// Survey Value Objects

mod session_id;
mod survey_id;

pub use session_id::*;
pub use survey_id::*;
