// Host Infrastructure Layer

mod in_memory_host;

pub use in_memory_host::*;
