// Repository implementations

mod file_session_repository;
mod file_survey_repository;
mod in_memory_session_repository;
mod in_memory_survey_repository;

pub use file_session_repository::*;
pub use file_survey_repository::*;
pub use in_memory_session_repository::*;
pub use in_memory_survey_repository::*;
