//! User HTTP Handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::application::{CreateUser, DeleteUser, ListUsers, UpdateUser};
use crate::domain::{User, UserName};
use crate::infrastructure::http::dto::UserResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取用户列表
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// 获取用户详情（用户已由 validate_user_id 查出）
pub async fn get_user(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

/// 创建用户
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(name): Extension<UserName>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .create_user_handler
        .handle(CreateUser { name })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// 更新用户，返回更新后重新查询到的用户
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Extension(name): Extension<UserName>,
) -> Result<Json<UserResponse>, ApiError> {
    let command = UpdateUser {
        user_id: user.id,
        name,
    };
    let updated = state.update_user_handler.handle(command).await?;

    Ok(Json(UserResponse::from(updated)))
}

/// 删除用户，返回删除前的用户
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Json<UserResponse>, ApiError> {
    let deleted = state.delete_user_handler.handle(DeleteUser { user }).await?;

    Ok(Json(UserResponse::from(deleted)))
}
