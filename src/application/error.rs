// src/application/error.rs
use crate::domain::errors::DomainError;
use serde::Serialize;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Key reported for every failure inside a cascade transaction.
pub const TRANSACTION_ERROR_KEY: &str = "transaction_error";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {message}")]
    Conflict { key: String, message: String },

    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A multi-step unit of work failed and was rolled back. The cause is
    /// logged where it happens and deliberately not carried here.
    #[error("transaction failed: {0}")]
    Transaction(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::conflict_on("conflict", msg)
    }

    /// Conflict reported under the name of the clashing field.
    pub fn conflict_on(key: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Conflict {
            key: key.into(),
            message: msg.into(),
        }
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn transaction(msg: impl Into<String>) -> Self {
        Self::Transaction(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound { .. })
        )
    }

    /// Machine readable key reported next to the message.
    pub fn key(&self) -> &str {
        match self {
            Self::Domain(DomainError::NotFound { key, .. }) => key,
            Self::Domain(DomainError::Validation(_)) | Self::Validation(_) => "validation",
            Self::Domain(DomainError::Conflict(_)) => "conflict",
            Self::Conflict { key, .. } => key,
            Self::Domain(DomainError::Persistence(_)) | Self::Infrastructure(_) => "infrastructure",
            Self::NotFound(_) => "not_found",
            Self::Forbidden(_) => "forbidden",
            Self::Transaction(_) => TRANSACTION_ERROR_KEY,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Domain(DomainError::NotFound { message, .. }) | Self::Conflict { message, .. } => {
                message.clone()
            }
            Self::Domain(DomainError::Validation(msg))
            | Self::Domain(DomainError::Conflict(msg))
            | Self::Domain(DomainError::Persistence(msg))
            | Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Forbidden(msg)
            | Self::Transaction(msg)
            | Self::Infrastructure(msg) => msg.clone(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            key: self.key().to_owned(),
            message: self.message(),
        }
    }
}

/// Key/message pair surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub key: String,
    pub message: String,
}
