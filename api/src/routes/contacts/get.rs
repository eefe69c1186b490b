use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;

use crate::dto::contact_dto::ContactResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /api/contacts/{id}
pub async fn get_contact<U, T, P, M, C>(
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
    match state.contact_service.get(id.into_inner()).await {
        Ok(contact) => HttpResponse::Ok().json(ContactResponse { contact }),
        Err(error) => handle_domain_error(error),
    }
}
