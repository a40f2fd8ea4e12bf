//! Application State
//!
//! 持久化端口在构造时注入，测试中可以替换为内存实现

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreatePostHandler, CreateUserHandler, DeleteUserHandler, UpdateUserHandler,
    // Query handlers
    GetUserHandler, ListUserPostsHandler, ListUsersHandler,
    // Ports
    PostRepositoryPort, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    /// 意外失败时是否在响应中返回错误链
    pub expose_error_stack: bool,

    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,
    pub update_user_handler: UpdateUserHandler,
    pub delete_user_handler: DeleteUserHandler,
    pub create_post_handler: CreatePostHandler,

    // ========== Query Handlers ==========
    pub list_users_handler: ListUsersHandler,
    pub get_user_handler: GetUserHandler,
    pub list_user_posts_handler: ListUserPostsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        post_repo: Arc<dyn PostRepositoryPort>,
    ) -> Self {
        Self {
            expose_error_stack: true,

            // Command handlers
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            update_user_handler: UpdateUserHandler::new(user_repo.clone()),
            delete_user_handler: DeleteUserHandler::new(user_repo.clone()),
            create_post_handler: CreatePostHandler::new(post_repo),

            // Query handlers
            list_users_handler: ListUsersHandler::new(user_repo.clone()),
            get_user_handler: GetUserHandler::new(user_repo.clone()),
            list_user_posts_handler: ListUserPostsHandler::new(user_repo),
        }
    }

    pub fn with_error_stack(mut self, expose: bool) -> Self {
        self.expose_error_stack = expose;
        self
    }
}
