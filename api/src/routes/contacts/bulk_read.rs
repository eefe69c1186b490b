use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;
use ah_shared::types::ErrorResponse;

use crate::dto::contact_dto::{BulkReadRequest, BulkReadResponse};
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for PATCH /api/contacts/bulk-read
pub async fn bulk_update_read<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    request: web::Json<BulkReadRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let request = request.into_inner();
    let (ids, read) = match (request.ids, request.read) {
        (Some(ids), Some(read)) => (ids, read),
        _ => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("ids (array) and read (boolean) are required"));
        }
    };

    match state.contact_service.set_read_bulk(&ids, read).await {
        Ok(count) => HttpResponse::Ok().json(BulkReadResponse { count }),
        Err(error) => handle_domain_error(error),
    }
}
