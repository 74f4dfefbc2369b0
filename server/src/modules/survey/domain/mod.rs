// Survey Domain Layer - 领域层
//
// 包含问卷与答卷会话的实体和值对象

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
