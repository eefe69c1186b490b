//! Outbound mail seam.
//!
//! Delivery is fire-and-forget from the caller's perspective: the reset
//! endpoint's HTTP response is the same whether or not the message reaches
//! anyone. Implementations live in the infrastructure crate.

use async_trait::async_trait;
use thiserror::Error;

/// Mail delivery errors
#[derive(Error, Debug)]
pub enum MailerError {
    #[error("email delivery failed: {message}")]
    DeliveryFailed { message: String },
}

/// Notification sink for password reset links
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a password reset link for `email` carrying `reset_token`
    async fn send_password_reset(&self, email: &str, reset_token: &str)
        -> Result<(), MailerError>;
}
