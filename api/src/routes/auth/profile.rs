use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::ErrorResponse;

use crate::dto::auth_dto::{ProfileResponse, UpdateProfileRequest};
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Handler for PATCH /api/auth/profile
///
/// Renames the authenticated user.
pub async fn update_profile<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    context: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let name = match request.into_inner().name.filter(|v| !v.trim().is_empty()) {
        Some(name) => name,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse::new("Name is required"));
        }
    };

    match state
        .auth_service
        .update_profile(context.user_id, name.trim())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse { user }),
        Err(error) => handle_domain_error(error),
    }
}
