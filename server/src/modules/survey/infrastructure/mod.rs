// Survey Infrastructure Layer - 基础设施层
// 实现端口的具体适配器

pub mod repositories;

pub use repositories::*;
