//! Domain-specific error types for authentication and related operations.
//!
//! The display strings double as the HTTP response messages, so they are
//! written for end users and kept deliberately generic where enumeration
//! resistance demands it.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Single message for both unknown-email and wrong-password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid admin secret")]
    InvalidAdminSecret,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid or expired access token")]
    InvalidAccessToken,

    #[error("No refresh token provided")]
    MissingRefreshToken,

    /// Single message whether the token was never issued, already rotated,
    /// or time-expired
    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{message}")]
    MissingFields { message: String },

    #[error("Invalid or expired reset token")]
    InvalidResetToken,
}

impl ValidationError {
    pub fn missing(message: impl Into<String>) -> Self {
        ValidationError::MissingFields {
            message: message.into(),
        }
    }
}
