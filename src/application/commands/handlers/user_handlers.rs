//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewUser, UserChanges, UserRepositoryPort};
use crate::domain::User;

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let user = self
            .user_repo
            .insert(&NewUser { name: command.name })
            .await?;

        tracing::info!(user_id = user.id, name = %user.name, "User created");

        Ok(user)
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler
///
/// 先更新再重新查询，两次调用之间没有事务保护
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<User, ApplicationError> {
        let user_id = command.user_id;

        self.user_repo
            .update(user_id, &UserChanges { name: command.name })
            .await?;

        // 更新与查询之间被并发删除时，找不到用户
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", user_id))?;

        tracing::info!(user_id = user_id, name = %user.name, "User updated");

        Ok(user)
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<User, ApplicationError> {
        let user = command.user;

        self.user_repo.remove(user.id).await?;

        tracing::info!(user_id = user.id, name = %user.name, "User deleted");

        Ok(user)
    }
}
