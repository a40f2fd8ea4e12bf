//! Data Transfer Objects
//!
//! 所有请求/响应体均为 JSON

use serde::Serialize;

use crate::domain::{Post, User};

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

// ============================================================================
// Post DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            text: post.text,
        }
    }
}
