//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET     健康检查
//! - /api/users               GET     列出所有用户
//! - /api/users               POST    创建用户            [body]
//! - /api/users/:id           GET     获取用户            [id]
//! - /api/users/:id           PUT     更新用户            [id, body]
//! - /api/users/:id           DELETE  删除用户            [id]
//! - /api/users/:id/posts     GET     列出用户帖子        [id]
//! - /api/users/:id/posts     POST    为用户创建帖子      [id, post-body]
//!
//! 方括号中为按顺序执行的校验器：存在性校验总在 body 校验之前，
//! 因此 id 和 body 都不合法时返回 404 而不是 400

use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;
use super::validators::{validate_post_body, validate_user_body, validate_user_id};

/// 创建所有路由
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes(state))
}

/// API 路由
fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/users", user_routes(state))
}

/// User 路由
///
/// 后添加的 layer 先执行
fn user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let user_exists = || from_fn_with_state(state.clone(), validate_user_id);
    let user_body = || from_fn(validate_user_body);
    let post_body = || from_fn(validate_post_body);

    Router::new()
        .route(
            "/",
            get(handlers::list_users).post(handlers::create_user.layer(user_body())),
        )
        .route(
            "/:id",
            get(handlers::get_user.layer(user_exists()))
                .put(
                    handlers::update_user
                        .layer(user_body())
                        .layer(user_exists()),
                )
                .delete(handlers::delete_user.layer(user_exists())),
        )
        .route(
            "/:id/posts",
            get(handlers::list_user_posts.layer(user_exists())).post(
                handlers::create_user_post
                    .layer(post_body())
                    .layer(user_exists()),
            ),
        )
}
