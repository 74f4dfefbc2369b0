// Host Ports Layer

mod host_port;

pub use host_port::*;
