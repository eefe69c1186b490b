//! Development mailer that logs reset links instead of delivering them.
//!
//! Real delivery is an external collaborator; in development and in tests
//! the reset URL in the server log is all an operator needs.

use async_trait::async_trait;

use ah_core::services::mailer::{Mailer, MailerError};

/// Mailer that writes the reset link to the log
pub struct LogMailer {
    /// Base URL of the dashboard client, e.g. `http://localhost:5173`
    client_url: String,
}

impl LogMailer {
    pub fn new(client_url: impl Into<String>) -> Self {
        Self {
            client_url: client_url.into(),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset(
        &self,
        email: &str,
        reset_token: &str,
    ) -> Result<(), MailerError> {
        let reset_url = format!(
            "{}/reset-password/{}",
            self.client_url.trim_end_matches('/'),
            reset_token
        );
        tracing::info!(email = %email, url = %reset_url, "password reset link issued");
        Ok(())
    }
}
