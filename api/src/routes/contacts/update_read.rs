use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::ErrorResponse;

use crate::dto::contact_dto::{ContactResponse, UpdateReadRequest};
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for PATCH /api/contacts/{id}/read
pub async fn update_read_status<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateReadRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let read = match request.into_inner().read {
        Some(read) => read,
        None => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("read must be a boolean"));
        }
    };

    match state.contact_service.set_read(id.into_inner(), read).await {
        Ok(contact) => HttpResponse::Ok().json(ContactResponse { contact }),
        Err(error) => handle_domain_error(error),
    }
}
