//! Error types for the AdminHub domain layer.

pub mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Top-level domain error wrapping the per-area error types.
///
/// The HTTP layer maps each variant onto a status code; see the API crate's
/// error handler for the table.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Conflict { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Internal { message: String },
}

impl DomainError {
    /// Convenience constructor for store/signing failures
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the domain layer
pub type DomainResult<T> = Result<T, DomainError>;
