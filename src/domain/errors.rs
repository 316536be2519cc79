// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {message}")]
    NotFound { key: String, message: String },
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            key: key.into(),
            message: message.into(),
        }
    }
}
