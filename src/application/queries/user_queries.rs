//! User Queries

use crate::domain::UserId;

/// 列出所有用户查询
#[derive(Debug, Clone)]
pub struct ListUsers;

/// 获取用户详情查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: UserId,
}

/// 列出用户帖子查询
#[derive(Debug, Clone)]
pub struct ListUserPosts {
    pub user_id: UserId,
}
