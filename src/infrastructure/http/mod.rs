//! HTTP Layer - RESTful API
//!
//! 请求处理流程：
//! request_logger → 路由对应的校验器（0~2 个）→ handler → 响应；
//! 失败路径统一经过 error_responder

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod validators;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer};
pub use state::AppState;
