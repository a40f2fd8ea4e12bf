//! Post Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("missing required text field")]
    MissingText,
}
