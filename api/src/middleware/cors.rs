//! CORS middleware configuration for the dashboard client.
//!
//! The refresh cookie rides on cross-origin requests, so the configuration
//! always supports credentials and therefore can never use a wildcard
//! origin. In development any origin is echoed back; in production only the
//! configured client origin is allowed.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: set to "production" for production settings
/// - `CLIENT_URL`: the dashboard origin allowed in production
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    if environment == "production" {
        let client_url = env::var("CLIENT_URL")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());
        create_production_cors(&client_url)
    } else {
        create_development_cors()
    }
}

/// Permissive credentialed CORS for local development
fn create_development_cors() -> Cors {
    Cors::default()
        // Echo whatever origin the dev client runs on
        .allowed_origin_fn(|_origin, _req_head| true)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// Restrictive CORS for production: only the deployed dashboard origin
fn create_production_cors(client_url: &str) -> Cors {
    Cors::default()
        .allowed_origin(client_url.trim_end_matches('/'))
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .supports_credentials()
        .max_age(3600)
}
