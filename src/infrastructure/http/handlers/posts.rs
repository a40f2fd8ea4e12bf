//! Post HTTP Handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::application::{CreatePost, ListUserPosts};
use crate::domain::{PostText, User};
use crate::infrastructure::http::dto::PostResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取用户的帖子列表
pub async fn list_user_posts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = state
        .list_user_posts_handler
        .handle(ListUserPosts { user_id: user.id })
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// 为用户创建帖子
pub async fn create_user_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Extension(text): Extension<PostText>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let command = CreatePost {
        user_id: user.id,
        text,
    };
    let post = state.create_post_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}
