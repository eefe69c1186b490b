//! Shared application state injected into every handler.

use std::sync::Arc;

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::auth::AuthService;
use ah_core::services::contact::ContactService;
use ah_core::services::mailer::Mailer;
use ah_shared::config::CookieConfig;

/// Application state, generic over every storage and delivery collaborator
/// so tests can assemble it from in-memory fakes.
pub struct AppState<U, T, P, M, C>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    P: ResetTokenRepository,
    M: Mailer,
    C: ContactRepository,
{
    /// Authentication and session lifecycle service
    pub auth_service: Arc<AuthService<U, T, P, M>>,
    /// Contact message service
    pub contact_service: Arc<ContactService<C>>,
    /// Refresh cookie settings for the deployment environment
    pub cookie: CookieConfig,
    /// Secret used by the bearer-token middleware
    pub jwt_secret: String,
}
