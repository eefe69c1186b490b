use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::ErrorResponse;

use crate::cookies::refresh_cookie;
use crate::dto::auth_dto::{SessionResponse, SignupRequest};
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/auth/signup
///
/// Creates an admin account gated by the shared admin secret and opens its
/// first session: 201 with `{user, accessToken}` plus the refresh cookie.
pub async fn signup<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let request = request.into_inner();
    let (name, email, password, admin_secret) = match (
        request.name.filter(|v| !v.is_empty()),
        request.email.filter(|v| !v.is_empty()),
        request.password.filter(|v| !v.is_empty()),
        request.admin_secret.filter(|v| !v.is_empty()),
    ) {
        (Some(name), Some(email), Some(password), Some(admin_secret)) => {
            (name, email, password, admin_secret)
        }
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("All fields are required"));
        }
    };

    match state
        .auth_service
        .signup(&name, &email, &password, &admin_secret)
        .await
    {
        Ok(session) => {
            let cookie = refresh_cookie(&state.cookie, session.refresh_token.clone());
            HttpResponse::Created()
                .cookie(cookie)
                .json(SessionResponse::from(session))
        }
        Err(error) => handle_domain_error(error),
    }
}
