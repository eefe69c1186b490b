use actix_web::{web, HttpResponse};

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;

use crate::dto::contact_dto::{ContactListQuery, ContactListResponse};
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /api/contacts
///
/// Newest-first listing with pagination, substring search over sender name
/// and email, a creation date window, and a read/unread filter.
pub async fn list_contacts<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
    query: web::Query<ContactListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    match state
        .contact_service
        .list(query.into_inner().into_query())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(ContactListResponse::from(page)),
        Err(error) => handle_domain_error(error),
    }
}
