//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - User Context: 用户管理
//! - Post Context: 用户帖子

pub mod post;
pub mod user;

pub use post::{Post, PostError, PostId, PostText};
pub use user::{User, UserError, UserId, UserName};
