// Config Domain Layer

mod entities;

pub use entities::*;
