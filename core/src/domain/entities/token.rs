//! Token entities for the authentication subsystem.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Password reset token expiration time (1 hour)
pub const RESET_TOKEN_EXPIRY_HOURS: i64 = 1;

/// Claims structure for the JWT access token payload
///
/// Access tokens are self-contained: any process holding the signing secret
/// can validate one without a database round trip. The flip side is that an
/// access token cannot be revoked before its natural expiry; the short
/// lifetime bounds that exposure window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token with the given lifetime
    pub fn new_access_token(user_id: Uuid, email: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token entity stored in the database
///
/// The opaque token value doubles as the lookup key. A row lives until it is
/// rotated (redeemed), explicitly revoked, or its expiry is lazily detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Opaque random token value, primary key
    pub token: String,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token for a user
    pub fn new(user_id: Uuid, token: String) -> Self {
        let now = Utc::now();

        Self {
            token,
            user_id,
            created_at: now,
            expires_at: now + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// One-time password reset token stored in the database
///
/// At most one unused token exists per email: issuing a new one marks every
/// prior unused token for that email as used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetToken {
    /// Opaque random token value, primary key
    pub token: String,

    /// Email the reset was requested for (stored lowercase)
    pub email: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been consumed or superseded
    pub used: bool,
}

impl PasswordResetToken {
    /// Creates a new password reset token for an email address
    pub fn new(email: String, token: String) -> Self {
        let now = Utc::now();

        Self {
            token,
            email,
            created_at: now,
            expires_at: now + Duration::hours(RESET_TOKEN_EXPIRY_HOURS),
            used: false,
        }
    }

    /// Checks if the reset token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// A token is usable only while unused and unexpired
    pub fn is_usable(&self) -> bool {
        !self.used && !self.is_expired()
    }
}
