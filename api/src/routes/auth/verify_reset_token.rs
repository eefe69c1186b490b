use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;

use crate::dto::auth_dto::ValidityResponse;
use crate::state::AppState;

/// Handler for GET /api/auth/verify-reset-token/{token}
///
/// Non-mutating probe used by the reset page on load. Always 200; a store
/// failure reads as an invalid link rather than an error page.
pub async fn verify_reset_token<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    token: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let valid = state
        .auth_service
        .verify_reset_token(&token)
        .await
        .unwrap_or(false);

    HttpResponse::Ok().json(ValidityResponse { valid })
}
