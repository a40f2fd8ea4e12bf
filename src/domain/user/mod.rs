//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户实体
//! - 用户名校验（去除首尾空白后不能为空）

mod entity;
mod errors;
mod value_objects;

pub use entity::User;
pub use errors::UserError;
pub use value_objects::{UserId, UserName};
