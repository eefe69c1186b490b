//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RefreshTokenRepository;

use super::config::TokenServiceConfig;

/// Opaque token length for refresh tokens
const REFRESH_TOKEN_LENGTH: usize = 64;

/// Opaque token length for password reset tokens
pub(crate) const RESET_TOKEN_LENGTH: usize = 64;

/// Outcome of redeeming a refresh token: the owning user and the
/// replacement issued by rotation. The presented value is dead either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemedToken {
    pub user_id: Uuid,
    pub replacement: String,
}

/// Service for signing access tokens and managing refresh token rows
pub struct TokenService<R: RefreshTokenRepository> {
    repository: Arc<R>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: RefreshTokenRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: Arc<R>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs an access token for a user
    ///
    /// Stateless by design: verification needs only the secret, so any
    /// server process can validate without a store round trip. The token
    /// cannot be revoked before its expiry.
    pub fn issue_access_token(&self, user_id: Uuid, email: &str) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(user_id, email, self.config.access_token_ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns its claims
    ///
    /// Tampered, malformed, and expired tokens all fail the same way; there
    /// is no partial trust.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::InvalidAccessToken))
    }

    /// Generates and stores a new refresh token for a user
    ///
    /// Multiple tokens per user may coexist (one per device session).
    pub async fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let token_value = generate_opaque_token(REFRESH_TOKEN_LENGTH);
        let refresh_token = RefreshToken::new(user_id, token_value.clone());

        self.repository
            .insert_token(refresh_token)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(token_value)
    }

    /// Redeems a refresh token, rotating it in the same operation
    ///
    /// The conditional delete is the linearization point: when two
    /// redemptions race on the same presented value, only the one whose
    /// delete removes the row gets to issue a replacement; the other fails
    /// with the uniform invalid/expired error.
    pub async fn redeem_refresh_token(&self, presented: &str) -> Result<RedeemedToken, DomainError> {
        let record = self
            .repository
            .find_by_token(presented)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if record.is_expired() {
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        if !self.repository.delete_token(presented).await? {
            // Lost the race: someone else already rotated this value.
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        let replacement = self.issue_refresh_token(record.user_id).await?;

        Ok(RedeemedToken {
            user_id: record.user_id,
            replacement,
        })
    }

    /// Deletes a single refresh token row; idempotent
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        self.repository.delete_token(token).await?;
        Ok(())
    }

    /// Deletes every refresh token for a user, returning the count
    ///
    /// Invoked after a password change so every open session has to
    /// re-authenticate.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        self.repository.delete_all_for_user(user_id).await
    }
}

/// Generates a cryptographically random alphanumeric token
pub(crate) fn generate_opaque_token(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..62u8);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}
