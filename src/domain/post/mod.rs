//! Post Context - 帖子限界上下文
//!
//! 帖子只能通过 "为用户创建帖子" 接口产生，归属于一个已存在的用户

mod entity;
mod errors;
mod value_objects;

pub use entity::Post;
pub use errors::PostError;
pub use value_objects::{PostId, PostText};
