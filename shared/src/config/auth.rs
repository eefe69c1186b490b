//! Authentication and session configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// JWT access token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            access_token_expiry: 900, // 15 minutes
            issuer: String::from("adminhub"),
        }
    }
}

impl JwtConfig {
    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == JwtConfig::default().secret
    }
}

/// Refresh token cookie configuration
///
/// The cookie carries the opaque refresh token between the browser and the
/// refresh endpoint. Cross-site deployments need `SameSite=None`, which in
/// turn requires the `Secure` flag, so both are driven by the environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// SameSite attribute: "none" for cross-site, "lax" otherwise
    pub same_site: String,

    /// Cookie max-age in seconds
    pub max_age: i64,

    /// Cookie path
    pub path: String,
}

impl CookieConfig {
    /// Cookie settings for the given deployment environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            name: String::from("refresh_token"),
            secure: environment.is_production(),
            same_site: if environment.is_production() {
                String::from("none")
            } else {
                String::from("lax")
            },
            max_age: 7 * 24 * 60 * 60, // 7 days
            path: String::from("/"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh token cookie configuration
    pub cookie: CookieConfig,

    /// Shared secret required to create admin accounts
    pub admin_secret: String,

    /// Base URL of the dashboard client, used for reset links and CORS
    pub client_url: String,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env(environment: Environment) -> Self {
        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(900);
        let admin_secret = std::env::var("ADMIN_SECRET").unwrap_or_default();
        let client_url = std::env::var("CLIENT_URL")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        Self {
            jwt: JwtConfig {
                secret: jwt_secret,
                access_token_expiry,
                issuer: String::from("adminhub"),
            },
            cookie: CookieConfig::for_environment(environment),
            admin_secret,
            client_url,
        }
    }
}
