use actix_web::{web, HttpRequest, HttpResponse};

use ah_core::errors::{DomainError, TokenError};
use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::ErrorResponse;

use crate::cookies::{clear_refresh_cookie, refresh_cookie};
use crate::dto::auth_dto::RefreshResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/auth/refresh
///
/// Redeems the refresh cookie for a new access token. The presented cookie
/// value is rotated: the response carries a replacement cookie and the old
/// value is dead from this point on. A missing, consumed, expired, or
/// unknown token uniformly yields 401 with the cookie cleared.
pub async fn refresh<U, T, P, M, C>(
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
    let cookie = match request.cookie(&state.cookie.name) {
        Some(cookie) => cookie,
        None => {
            return handle_domain_error(DomainError::Token(TokenError::MissingRefreshToken));
        }
    };

    match state.auth_service.refresh(cookie.value()).await {
        Ok(rotated) => {
            let cookie = refresh_cookie(&state.cookie, rotated.refresh_token.clone());
            HttpResponse::Ok().cookie(cookie).json(RefreshResponse {
                access_token: rotated.access_token,
            })
        }
        Err(DomainError::Token(error)) => {
            // The browser's cookie points at a dead session; drop it.
            HttpResponse::Unauthorized()
                .cookie(clear_refresh_cookie(&state.cookie))
                .json(ErrorResponse::new(error.to_string()))
        }
        Err(error) => handle_domain_error(error),
    }
}
