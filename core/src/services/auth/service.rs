//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::PasswordResetToken;
use crate::domain::entities::user::{User, UserSummary};
use crate::domain::value_objects::{AuthenticatedSession, RotatedSession};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{RefreshTokenRepository, ResetTokenRepository, UserRepository};
use crate::services::mailer::Mailer;
use crate::services::token::service::{generate_opaque_token, RESET_TOKEN_LENGTH};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service orchestrating the session lifecycle
///
/// Generic over its repositories and the mailer so every collaborator can be
/// swapped for an in-memory fake in tests.
pub struct AuthService<U, T, P, M>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    P: ResetTokenRepository,
    M: Mailer,
{
    /// User repository for account lookups and mutations
    user_repository: Arc<U>,
    /// Token service for access token signing and refresh rotation
    token_service: Arc<TokenService<T>>,
    /// Password reset token repository
    reset_repository: Arc<P>,
    /// Notification sink for reset links
    mailer: Arc<M>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T, P, M> AuthService<U, T, P, M>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    P: ResetTokenRepository,
    M: Mailer,
{
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        reset_repository: Arc<P>,
        mailer: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            reset_repository,
            mailer,
            config,
        }
    }

    /// Create an admin account and open its first session
    ///
    /// The admin secret gates account creation entirely; the email is
    /// case-folded before the uniqueness check so `Admin@X.com` and
    /// `admin@x.com` are the same account.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        admin_secret: &str,
    ) -> DomainResult<AuthenticatedSession> {
        if admin_secret != self.config.admin_secret {
            return Err(DomainError::Auth(AuthError::InvalidAdminSecret));
        }

        let email = email.trim().to_lowercase();

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict {
                message: "An account with this email already exists".to_string(),
            });
        }

        let password_hash = self.hash_password(password)?;
        let user = self
            .user_repository
            .insert(User::new(name.to_string(), email, password_hash))
            .await?;

        self.open_session(&user).await
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password collapse into one error so the
    /// response cannot be used to probe which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthenticatedSession> {
        let email = email.trim().to_lowercase();

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(DomainError::Auth(AuthError::InvalidCredentials)),
        };

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| DomainError::internal(format!("password verification failed: {}", e)))?;
        if !matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        self.open_session(&user).await
    }

    /// Exchange a refresh token for a new access/refresh pair
    ///
    /// The presented token is rotated: it is consumed by this call whether
    /// or not the caller ever uses the replacement.
    pub async fn refresh(&self, presented: &str) -> DomainResult<RotatedSession> {
        let redeemed = self.token_service.redeem_refresh_token(presented).await?;

        let user = self
            .user_repository
            .find_by_id(redeemed.user_id)
            .await?
            .ok_or(DomainError::Token(
                crate::errors::TokenError::InvalidRefreshToken,
            ))?;

        let access_token = self.token_service.issue_access_token(user.id, &user.email)?;

        Ok(RotatedSession {
            access_token,
            refresh_token: redeemed.replacement,
        })
    }

    /// End the session that owns the presented refresh token
    ///
    /// Always succeeds; revoking an unknown token is a no-op.
    pub async fn logout(&self, presented: &str) -> DomainResult<()> {
        self.token_service.revoke_refresh_token(presented).await
    }

    /// Begin a password reset
    ///
    /// Returns `Ok` regardless of whether the account exists (enumeration
    /// resistance). When it does exist, every prior unused token for the
    /// email is superseded and a fresh one is handed to the mailer;
    /// delivery failures are logged, never surfaced.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let email = email.trim().to_lowercase();

        if self.user_repository.find_by_email(&email).await?.is_none() {
            return Ok(());
        }

        self.reset_repository.mark_all_used_for_email(&email).await?;

        let token_value = generate_opaque_token(RESET_TOKEN_LENGTH);
        self.reset_repository
            .insert_token(PasswordResetToken::new(email.clone(), token_value.clone()))
            .await?;

        if let Err(e) = self.mailer.send_password_reset(&email, &token_value).await {
            tracing::error!(email = %email, error = %e, "failed to send password reset email");
        }

        Ok(())
    }

    /// Non-mutating check that a reset link is still valid
    pub async fn verify_reset_token(&self, token: &str) -> DomainResult<bool> {
        let record = self.reset_repository.find_by_token(token).await?;
        Ok(record.map(|t| t.is_usable()).unwrap_or(false))
    }

    /// Consume a reset token and set a new password
    ///
    /// The token is re-verified here even when the caller already probed it,
    /// so a racing consume or supersede cannot slip through. Success revokes
    /// every refresh token for the account, including the session that
    /// initiated the reset.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        let record = self
            .reset_repository
            .find_by_token(token)
            .await?
            .filter(|t| t.is_usable())
            .ok_or(DomainError::Validation(ValidationError::InvalidResetToken))?;

        let password_hash = self.hash_password(new_password)?;
        self.user_repository
            .update_password_hash(&record.email, &password_hash)
            .await?;

        self.reset_repository.mark_used(token).await?;

        if let Some(user) = self.user_repository.find_by_email(&record.email).await? {
            self.token_service.revoke_all_for_user(user.id).await?;
        }

        Ok(())
    }

    /// Rename the authenticated user
    pub async fn update_profile(&self, user_id: Uuid, name: &str) -> DomainResult<UserSummary> {
        let user = self
            .user_repository
            .update_name(user_id, name)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        Ok(user.summary())
    }

    /// Issue the access/refresh pair for a freshly authenticated user
    async fn open_session(&self, user: &User) -> DomainResult<AuthenticatedSession> {
        let access_token = self.token_service.issue_access_token(user.id, &user.email)?;
        let refresh_token = self.token_service.issue_refresh_token(user.id).await?;

        Ok(AuthenticatedSession {
            user: user.summary(),
            access_token,
            refresh_token,
        })
    }

    fn hash_password(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.config.bcrypt_cost)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
    }
}
