use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::{ErrorResponse, MessageResponse};

use crate::dto::auth_dto::ResetPasswordRequest;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/auth/reset-password
///
/// Consumes a reset token and sets the new password. Success revokes every
/// refresh token for the account, so all open sessions — including the one
/// that requested the reset — must log in again.
pub async fn reset_password<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let request = request.into_inner();
    let (token, new_password) = match (
        request.token.filter(|v| !v.is_empty()),
        request.new_password.filter(|v| !v.is_empty()),
    ) {
        (Some(token), Some(new_password)) => (token, new_password),
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("Token and newPassword are required"));
        }
    };

    match state.auth_service.reset_password(&token, &new_password).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password reset successfully")),
        Err(error) => handle_domain_error(error),
    }
}
