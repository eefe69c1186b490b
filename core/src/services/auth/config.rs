//! Authentication service configuration

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Shared secret required to create admin accounts
    pub admin_secret: String,

    /// Bcrypt work factor; lowered in tests to keep them fast
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            admin_secret: String::new(),
            bcrypt_cost: 12,
        }
    }
}

impl AuthServiceConfig {
    pub fn new(admin_secret: impl Into<String>) -> Self {
        Self {
            admin_secret: admin_secret.into(),
            ..Default::default()
        }
    }
}
