// Config Ports Layer

mod config_port;
mod config_repository;

pub use config_port::*;
pub use config_repository::*;
