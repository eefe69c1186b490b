//! Session value objects returned by the authentication service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::UserSummary;

/// Result of a successful login or signup: the user projection plus a fresh
/// access/refresh token pair. The refresh token travels back to the browser
/// only inside an httpOnly cookie; it is never part of a JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedSession {
    pub user: UserSummary,
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a successful refresh: a new access token and the replacement
/// refresh token issued by rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatedSession {
    pub access_token: String,
    pub refresh_token: String,
}
