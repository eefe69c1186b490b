//! Password reset token repository trait.

use async_trait::async_trait;

use crate::domain::entities::token::PasswordResetToken;
use crate::errors::DomainError;

/// Repository contract for one-time password reset tokens
///
/// The store-level invariant — at most one unused token per email — is kept
/// by callers invoking `mark_all_used_for_email` before every insert.
#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    /// Insert a freshly issued reset token row
    async fn insert_token(&self, token: PasswordResetToken) -> Result<(), DomainError>;

    /// Find a reset token row by its exact opaque value
    ///
    /// Returns used and expired rows too; callers check usability so the
    /// consume path can re-verify under race.
    async fn find_by_token(&self, token: &str)
        -> Result<Option<PasswordResetToken>, DomainError>;

    /// Mark a single token used, returning whether a row was updated
    async fn mark_used(&self, token: &str) -> Result<bool, DomainError>;

    /// Mark every unused token for an email as used, returning the count
    async fn mark_all_used_for_email(&self, email: &str) -> Result<usize, DomainError>;
}
