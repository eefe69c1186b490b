use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::MessageResponse;

use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for DELETE /api/contacts/{id}
pub async fn delete_contact<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    id: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    match state.contact_service.delete(id.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Contact deleted successfully")),
        Err(error) => handle_domain_error(error),
    }
}
