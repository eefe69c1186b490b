use actix_web::{web, HttpResponse};
use chrono::Utc;

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;

use crate::dto::contact_dto::StatsResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /api/contacts/stats
///
/// Dashboard aggregation: totals, trends against last month, and the
/// trailing twelve-month chart series.
pub async fn get_stats<U, T, P, M, C>(
    state: web::Data<AppState<U, T, P, M, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    match state.contact_service.stats(Utc::now()).await {
        Ok(stats) => HttpResponse::Ok().json(StatsResponse::from(stats)),
        Err(error) => handle_domain_error(error),
    }
}
