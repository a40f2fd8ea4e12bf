//! PostHub - 用户与帖子 REST API
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户与用户名校验
//! - Post Context: 帖子与正文校验
//!
//! 应用层 (application/):
//! - Ports: UserRepository, PostRepository
//! - Commands: CreateUser, UpdateUser, DeleteUser, CreatePost
//! - Queries: ListUsers, GetUser, ListUserPosts
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API、校验中间件、请求日志、统一错误响应
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
