//! Application factory
//!
//! Assembles the actix-web application from a prebuilt `AppState`, wiring
//! middleware and every route. Tests call `create_app` with in-memory
//! repositories; the binary calls it with the MySQL ones.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ah_core::repositories::{
    ContactRepository, RefreshTokenRepository, ResetTokenRepository, UserRepository,
};
use ah_core::services::mailer::Mailer;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{
    forgot_password::forgot_password, login::login, logout::logout, profile::update_profile,
    refresh::refresh, reset_password::reset_password, signup::signup,
    verify_reset_token::verify_reset_token,
};
use crate::routes::contacts::{
    bulk_read::bulk_update_read, delete::delete_contact, get::get_contact, list::list_contacts,
    stats::get_stats, update_read::update_read_status,
};
use crate::state::AppState;

/// Create and configure the application with all routes and middleware
pub fn create_app<U, T, P, M, C>(
    app_state: web::Data<AppState<U, T, P, M, C>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    P: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    C: ContactRepository + 'static,
{
    let cors = create_cors();
    let jwt_secret = app_state.jwt_secret.clone();

    App::new()
        // Add application state
        .app_data(app_state)
        // Request logging first, then CORS
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                // Auth routes: the lifecycle endpoints are public, profile
                // requires a bearer token
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<U, T, P, M, C>))
                        .route("/login", web::post().to(login::<U, T, P, M, C>))
                        .route("/refresh", web::post().to(refresh::<U, T, P, M, C>))
                        .route("/logout", web::post().to(logout::<U, T, P, M, C>))
                        .route(
                            "/forgot-password",
                            web::post().to(forgot_password::<U, T, P, M, C>),
                        )
                        .route(
                            "/verify-reset-token/{token}",
                            web::get().to(verify_reset_token::<U, T, P, M, C>),
                        )
                        .route(
                            "/reset-password",
                            web::post().to(reset_password::<U, T, P, M, C>),
                        )
                        .route(
                            "/profile",
                            web::patch()
                                .to(update_profile::<U, T, P, M, C>)
                                .wrap(JwtAuth::new(jwt_secret.clone())),
                        ),
                )
                // Contact routes, all behind the bearer-token middleware
                .service(
                    web::scope("/contacts")
                        .wrap(JwtAuth::new(jwt_secret))
                        .route("/stats", web::get().to(get_stats::<U, T, P, M, C>))
                        .route("", web::get().to(list_contacts::<U, T, P, M, C>))
                        .route(
                            "/bulk-read",
                            web::patch().to(bulk_update_read::<U, T, P, M, C>),
                        )
                        .route("/{id}", web::get().to(get_contact::<U, T, P, M, C>))
                        .route(
                            "/{id}/read",
                            web::patch().to(update_read_status::<U, T, P, M, C>),
                        )
                        .route("/{id}", web::delete().to(delete_contact::<U, T, P, M, C>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "adminhub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "The requested resource was not found"
    }))
}
