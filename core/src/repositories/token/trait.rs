//! Refresh token repository trait.
//!
//! The interface is intentionally minimal: exact-match lookup, insert, and
//! two deletion shapes. Rotation correctness rests on `delete_token`
//! reporting whether a row was actually removed — under concurrent
//! redemption of the same presented token, exactly one caller observes
//! `true` and gets to issue the replacement.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository contract for refresh token rows
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Insert a freshly issued token row
    async fn insert_token(&self, token: RefreshToken) -> Result<(), DomainError>;

    /// Find a token row by its exact opaque value
    ///
    /// Returns expired rows too; expiry is detected lazily by the caller.
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete a single token row
    ///
    /// Returns `true` only when a row was actually removed. This is the
    /// linearization point of rotation: the caller that wins the delete is
    /// the only one allowed to issue a replacement.
    async fn delete_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete every token row for a user, returning how many were removed
    ///
    /// Invoked after a password reset to force re-authentication on all
    /// sessions.
    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Delete rows whose expiry has passed, returning how many were removed
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
