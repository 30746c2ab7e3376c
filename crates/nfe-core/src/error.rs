//! Core error types.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Access key failed structural validation
    #[error("invalid access key: {0}")]
    InvalidAccessKey(String),
}

/// Core operation result type
pub type Result<T> = std::result::Result<T, CoreError>;
