// Config Infrastructure Layer

mod file_repository;
mod memory_repository;

pub use file_repository::*;
pub use memory_repository::*;
