// Survey Entities

mod session;
mod survey;

pub use session::*;
pub use survey::*;
