use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::{ErrorResponse, MessageResponse};

use crate::dto::auth_dto::ForgotPasswordRequest;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/auth/forgot-password
///
/// Always answers with the same generic 200 whether or not the email has an
/// account, so the endpoint cannot be used to probe for registered
/// addresses.
pub async fn forgot_password<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let email = match request.into_inner().email.filter(|v| !v.is_empty()) {
        Some(email) => email,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse::new("Email is required"));
        }
    };

    match state.auth_service.forgot_password(&email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "If an account with that email exists, a reset link has been sent.",
        )),
        Err(error) => handle_domain_error(error),
    }
}
