//! User repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for user rows
///
/// Email lookups are exact-match; callers are responsible for lowercasing
/// (the column stores the case-folded form).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by (lowercased) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Insert a new user row
    ///
    /// Fails with `DomainError::Conflict` when the email is already taken.
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Replace the password hash for the user with the given email
    ///
    /// Returns `true` when a row was updated.
    async fn update_password_hash(&self, email: &str, password_hash: &str)
        -> Result<bool, DomainError>;

    /// Rename a user, returning the updated row
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<User>, DomainError>;
}
