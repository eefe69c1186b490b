use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::ErrorResponse;

use crate::cookies::refresh_cookie;
use crate::dto::auth_dto::{LoginRequest, SessionResponse};
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/auth/login
///
/// Returns 200 with `{user, accessToken}` and sets the refresh cookie.
/// Unknown email and wrong password produce the same 401 payload.
pub async fn login<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let request = request.into_inner();
    let (email, password) = match (
        request.email.filter(|v| !v.is_empty()),
        request.password.filter(|v| !v.is_empty()),
    ) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("Email and password are required"));
        }
    };

    match state.auth_service.login(&email, &password).await {
        Ok(session) => {
            let cookie = refresh_cookie(&state.cookie, session.refresh_token.clone());
            HttpResponse::Ok()
                .cookie(cookie)
                .json(SessionResponse::from(session))
        }
        Err(error) => handle_domain_error(error),
    }
}
