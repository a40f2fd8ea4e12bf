//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（UserRepository、PostRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreatePostHandler, CreateUserHandler, DeleteUserHandler, UpdateUserHandler},
    CreatePost, CreateUser, DeleteUser, UpdateUser,
};

pub use error::ApplicationError;

pub use ports::{
    NewPost, NewUser, PostChanges, PostRepositoryPort, RepositoryError, UserChanges,
    UserRepositoryPort,
};

pub use queries::{
    handlers::{GetUserHandler, ListUserPostsHandler, ListUsersHandler},
    GetUser, ListUserPosts, ListUsers,
};
