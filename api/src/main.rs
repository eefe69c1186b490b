use actix_web::web;
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use ah_api::app::create_app;
use ah_api::state::AppState;
use ah_core::services::auth::{AuthService, AuthServiceConfig};
use ah_core::services::contact::ContactService;
use ah_core::services::token::{TokenService, TokenServiceConfig};
use ah_infra::{
    create_pool, LogMailer, MySqlContactRepository, MySqlRefreshTokenRepository,
    MySqlResetTokenRepository, MySqlUserRepository,
};
use ah_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    if config.auth.jwt.is_using_default_secret() && config.environment.is_production() {
        tracing::warn!("JWT_SECRET is not set; refusing to run with the default in production");
        anyhow::bail!("JWT_SECRET must be set in production");
    }
    if config.auth.admin_secret.is_empty() {
        tracing::warn!("ADMIN_SECRET is empty; signup is effectively disabled");
    }

    tracing::info!(environment = ?config.environment, "starting AdminHub API server");

    // Database and repositories
    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;

    let user_repo = Arc::new(MySqlUserRepository::new(pool.clone()));
    let refresh_repo = Arc::new(MySqlRefreshTokenRepository::new(pool.clone()));
    let reset_repo = Arc::new(MySqlResetTokenRepository::new(pool.clone()));
    let contact_repo = Arc::new(MySqlContactRepository::new(pool));

    // Services
    let token_service = Arc::new(TokenService::new(
        refresh_repo,
        TokenServiceConfig::from(&config.auth.jwt),
    ));
    let mailer = Arc::new(LogMailer::new(config.auth.client_url.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repo,
        token_service,
        reset_repo,
        mailer,
        AuthServiceConfig::new(config.auth.admin_secret.clone()),
    ));
    let contact_service = Arc::new(ContactService::new(contact_repo));

    let app_state = web::Data::new(AppState {
        auth_service,
        contact_service,
        cookie: config.auth.cookie.clone(),
        jwt_secret: config.auth.jwt.secret.clone(),
    });

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "binding HTTP server");

    let workers = config.server.workers;
    let server = actix_web::HttpServer::new(move || create_app(app_state.clone()));
    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated unexpectedly")
}
