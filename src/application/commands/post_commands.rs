//! Post Commands

use crate::domain::{PostText, UserId};

/// 为用户创建帖子命令
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub user_id: UserId,
    pub text: PostText,
}
