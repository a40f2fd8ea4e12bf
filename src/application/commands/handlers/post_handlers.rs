//! Post Command Handlers

use std::sync::Arc;

use crate::application::commands::CreatePost;
use crate::application::error::ApplicationError;
use crate::application::ports::{NewPost, PostRepositoryPort};
use crate::domain::Post;

/// CreatePost Handler
///
/// 调用方需保证 user_id 对应的用户已存在
pub struct CreatePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl CreatePostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, command: CreatePost) -> Result<Post, ApplicationError> {
        let post = self
            .post_repo
            .insert(&NewPost {
                user_id: command.user_id,
                text: command.text,
            })
            .await?;

        tracing::info!(post_id = post.id, user_id = post.user_id, "Post created");

        Ok(post)
    }
}
