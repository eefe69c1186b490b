use actix_web::{web, HttpRequest, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::MessageResponse;

use crate::cookies::clear_refresh_cookie;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/auth/logout
///
/// Revokes the session behind the refresh cookie, if any, and clears the
/// cookie. Always returns 200; logging out twice is harmless.
pub async fn logout<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    request: HttpRequest,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    if let Some(cookie) = request.cookie(&state.cookie.name) {
        if let Err(error) = state.auth_service.logout(cookie.value()).await {
            return handle_domain_error(error);
        }
    }

    HttpResponse::Ok()
        .cookie(clear_refresh_cookie(&state.cookie))
        .json(MessageResponse::new("Logged out successfully"))
}
