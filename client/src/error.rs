//! Client error types.

use thiserror::Error;

/// Errors surfaced by the API client
///
/// Cloneable so a failed renewal can be delivered to every request queued
/// behind it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("request failed: {message}")]
    Transport { message: String },

    /// Session renewal failed; the caller must re-authenticate
    #[error("session expired: {message}")]
    SessionExpired { message: String },
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport {
            message: message.into(),
        }
    }

    /// Status code for API errors, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
