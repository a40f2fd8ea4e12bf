//! HTTP Error Handling
//!
//! 两类错误：
//! - 校验失败（404 / 400），由校验中间件直接响应 `{ message }`
//! - 意外失败，交给 error responder 统一渲染
//!   `{ customMessage, message, stack }`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::error::Error as StdError;

use crate::application::ApplicationError;
use crate::domain::{PostError, UserError};

/// 意外失败时固定返回的提示
pub const CUSTOM_MESSAGE: &str = "something went wrong";

/// 用户不存在（包括 id 非法、查询失败）
pub const USER_NOT_FOUND: &str = "user not found";

/// 校验失败响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 统一错误响应格式
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub custom_message: String,
    pub message: String,
    pub stack: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            custom_message: CUSTOM_MESSAGE.to_string(),
            message: message.into(),
            stack: stack.into(),
        }
    }
}

/// 意外失败
///
/// 渲染为响应后同时保存在响应 extensions 中，供 error responder 取用
#[derive(Debug, Clone)]
pub struct UnexpectedFailure {
    pub status: StatusCode,
    pub message: String,
    pub stack: String,
}

impl UnexpectedFailure {
    pub fn from_error(status: StatusCode, err: &(dyn StdError + 'static)) -> Self {
        Self {
            status,
            message: err.to_string(),
            stack: render_stack(err),
        }
    }
}

impl IntoResponse for UnexpectedFailure {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.message.clone(), self.stack.clone());
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// 错误链：第一行为错误本身的 Debug 表示，之后每一行是一层 source
pub fn render_stack(err: &(dyn StdError + 'static)) -> String {
    let mut stack = format!("{:?}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        stack.push_str("\n    caused by: ");
        stack.push_str(&cause.to_string());
        source = cause.source();
    }
    stack
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unexpected(UnexpectedFailure),
}

impl ApiError {
    pub fn user_not_found() -> Self {
        ApiError::NotFound(USER_NOT_FOUND.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = 404, error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, Json(MessageResponse { message: msg })).into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = 400, error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, Json(MessageResponse { message: msg })).into_response()
            }
            ApiError::Unexpected(failure) => failure.into_response(),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        ApiError::Unexpected(UnexpectedFailure::from_error(e.status(), &e))
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<PostError> for ApiError {
    fn from(e: PostError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RepositoryError;

    #[test]
    fn test_application_error_becomes_unexpected() {
        let err = ApplicationError::from(RepositoryError::DatabaseError("disk I/O error".into()));
        let ApiError::Unexpected(failure) = ApiError::from(err) else {
            panic!("expected unexpected failure");
        };
        assert_eq!(failure.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            failure.message,
            "Repository error: Database error: disk I/O error"
        );
        assert!(failure.stack.starts_with("Repository(DatabaseError("));
        assert!(failure
            .stack
            .contains("caused by: Database error: disk I/O error"));
    }

    #[test]
    fn test_not_found_application_error_keeps_status() {
        let err = ApplicationError::not_found("User", 3);
        let ApiError::Unexpected(failure) = ApiError::from(err) else {
            panic!("expected unexpected failure");
        };
        assert_eq!(failure.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let response = ApiError::from(UserError::MissingName).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(PostError::MissingText).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unexpected_failure_is_kept_in_extensions() {
        let failure = UnexpectedFailure {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".into(),
            stack: "boom".into(),
        };
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<UnexpectedFailure>().is_some());
    }
}
