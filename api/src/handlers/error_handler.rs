//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;

use ah_core::errors::{AuthError, DomainError, TokenError};
use ah_shared::types::ErrorResponse;

/// Convert a domain error into the HTTP response the dashboard expects.
///
/// | Domain error | Status |
/// |---|---|
/// | Validation | 400 |
/// | Auth (credentials, tokens) | 401 |
/// | Auth (admin secret) | 403 |
/// | NotFound | 404 |
/// | Conflict | 409 |
/// | Internal, token generation | 500 |
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Validation(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Auth(AuthError::InvalidAdminSecret) => {
            HttpResponse::Forbidden().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Auth(_) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Token(TokenError::TokenGenerationFailed) => internal(error),
        DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Conflict { .. } => {
            HttpResponse::Conflict().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Internal { .. } => internal(error),
    }
}

/// Internal failures are logged in full and surfaced generically; no
/// partial session or store detail ever reaches the caller.
fn internal(error: DomainError) -> HttpResponse {
    tracing::error!(error = %error, "internal error");
    HttpResponse::InternalServerError().json(ErrorResponse::new("An internal error occurred"))
}
