//! HTTP Middleware
//!
//! - request_logger: 记录每个请求（时间、方法、原始 URL）以及响应状态
//! - error_responder: 把意外失败渲染成统一的错误响应
//! - panic_response: handler panic 时生成的意外失败

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;

use super::error::{ErrorResponse, UnexpectedFailure};
use super::state::AppState;

/// 请求日志中间件
///
/// 在任何其他处理之前记录 `[时间] METHOD to URL`，然后无条件继续。
/// 响应返回后，4xx 记为 warn，5xx 记为 error
pub async fn request_logger(request: Request, next: Next) -> Response {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let method = request.method().clone();
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| request.uri().clone());

    tracing::info!(method = %method, uri = %uri, "[{}] {} to {}", timestamp, method, uri);

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 终端错误处理
///
/// 所有没有被校验中间件处理掉的失败都会带着 `UnexpectedFailure` 到达这里，
/// 以其声明的状态码（默认 500）返回 `{ customMessage, message, stack }`
pub async fn error_responder(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(failure) = response.extensions_mut().remove::<UnexpectedFailure>() else {
        return response;
    };

    tracing::error!(
        status = %failure.status.as_u16(),
        error = %failure.message,
        "Request failed"
    );

    let stack = if state.expose_error_stack {
        failure.stack
    } else {
        String::new()
    };

    (failure.status, Json(ErrorResponse::new(failure.message, stack))).into_response()
}

/// handler panic 转换为 500 意外失败
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    UnexpectedFailure {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        stack: format!("panicked: {}", message),
        message,
    }
    .into_response()
}
