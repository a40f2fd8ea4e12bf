//! User Commands

use crate::domain::{User, UserId, UserName};

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: UserName,
}

/// 更新用户命令
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub name: UserName,
}

/// 删除用户命令
///
/// 携带删除前已查询到的用户，删除成功后原样返回
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user: User,
}
