//! Request Validators
//!
//! 每个校验器要么把解析结果放入请求 extensions 后继续，
//! 要么直接返回 4xx 响应并终止后续处理。
//!
//! - validate_user_id: 用户必须存在，解析出的 `User` 放入 extensions
//! - validate_user_body: body 中必须有非空 `name`，放入 `UserName`
//! - validate_post_body: body 中必须有非空 `text`，放入 `PostText`

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{rejection::PathRejection, Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::request::Parts;

use super::error::ApiError;
use super::state::AppState;
use crate::application::{ApplicationError, GetUser};
use crate::domain::{PostText, User, UserId, UserName};

/// 校验时缓冲 body 的上限
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// 用户存在性校验
///
/// 找不到用户、id 非法、查询本身失败，对调用方来说都是 404
pub async fn validate_user_id(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable user id");
            return ApiError::user_not_found().into_response();
        }
    };

    match resolve_user(&state, &id).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

async fn resolve_user(state: &AppState, raw_id: &str) -> Result<User, ApiError> {
    let user_id: UserId = raw_id.trim().parse().map_err(|_| {
        tracing::debug!(id = %raw_id, "Malformed user id");
        ApiError::user_not_found()
    })?;

    state
        .get_user_handler
        .handle(GetUser { user_id })
        .await
        .map_err(|e| {
            if !matches!(e, ApplicationError::NotFound { .. }) {
                tracing::warn!(user_id = user_id, error = %e, "User lookup failed");
            }
            ApiError::user_not_found()
        })
}

/// 用户 body 校验
pub async fn validate_user_body(request: Request, next: Next) -> Response {
    let (mut parts, bytes) = buffer_body(request).await;

    match UserName::parse(&text_field(&bytes, "name")) {
        Ok(name) => {
            parts.extensions.insert(name);
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// 帖子 body 校验
pub async fn validate_post_body(request: Request, next: Next) -> Response {
    let (mut parts, bytes) = buffer_body(request).await;

    match PostText::parse(&text_field(&bytes, "text")) {
        Ok(text) => {
            parts.extensions.insert(text);
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// 读取完整 body，读取失败视为空 body
async fn buffer_body(request: Request) -> (Parts, Bytes) {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Failed to read request body");
        Bytes::new()
    });
    (parts, bytes)
}

/// 取出 JSON 对象中的字符串字段
///
/// body 不是 JSON 对象、字段缺失或不是字符串时返回空串
fn text_field(body: &[u8], field: &str) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get(field)?.as_str().map(str::to_string))
        .unwrap_or_default()
}
