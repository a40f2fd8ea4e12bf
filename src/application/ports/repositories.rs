//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Post, PostId, PostText, User, UserId, UserName};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 新建用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
}

/// 用户修改内容（目前只允许修改 name）
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: UserName,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 获取所有用户
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// 插入用户，返回带生成 ID 的用户
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// 更新用户，返回受影响的行数
    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<u64, RepositoryError>;

    /// 删除用户（连同其帖子），返回受影响的行数
    async fn remove(&self, id: UserId) -> Result<u64, RepositoryError>;

    /// 获取用户的所有帖子
    async fn find_posts(&self, id: UserId) -> Result<Vec<Post>, RepositoryError>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// 新建帖子
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: UserId,
    pub text: PostText,
}

/// 帖子修改内容
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub text: PostText,
}

/// Post Repository Port
#[async_trait]
pub trait PostRepositoryPort: Send + Sync {
    /// 获取所有帖子
    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError>;

    /// 根据 ID 查找帖子
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError>;

    /// 插入帖子，返回带生成 ID 的帖子
    async fn insert(&self, post: &NewPost) -> Result<Post, RepositoryError>;

    /// 更新帖子，返回受影响的行数
    async fn update(&self, id: PostId, changes: &PostChanges) -> Result<u64, RepositoryError>;

    /// 删除帖子，返回受影响的行数
    async fn remove(&self, id: PostId) -> Result<u64, RepositoryError>;
}
