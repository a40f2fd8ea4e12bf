//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use http::StatusCode;
use thiserror::Error;

use crate::application::ports::RepositoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 仓储错误
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 错误携带的 HTTP 状态码，未声明时为 500
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = ApplicationError::not_found("User", 7);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "User not found: 7");
    }

    #[test]
    fn test_repository_error_is_internal() {
        let err = ApplicationError::from(RepositoryError::StorageError("disk full".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
