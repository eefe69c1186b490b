//! Authentication request/response DTOs.
//!
//! Request fields are optional so presence checks can produce the exact
//! 400 messages the dashboard client renders, rather than serde's
//! deserialization errors.

use serde::{Deserialize, Serialize};

use ah_core::domain::entities::user::UserSummary;
use ah_core::domain::value_objects::AuthenticatedSession;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub admin_secret: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
}

/// Login/signup response: the user projection and the access token.
/// The refresh token is set as a cookie, never returned in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserSummary,
    pub access_token: String,
}

impl From<AuthenticatedSession> for SessionResponse {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            user: session.user,
            access_token: session.access_token,
        }
    }
}

/// Refresh response carrying only the new access token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Reset-link validity probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidityResponse {
    pub valid: bool,
}

/// Profile update response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserSummary,
}
