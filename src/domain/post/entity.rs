//! Post Context - Entity

use super::PostId;
use crate::domain::user::UserId;

/// 帖子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub text: String,
}
