//! Shared setup for API integration tests: the full app wired over
//! in-memory repositories.
#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::web;
use std::sync::Arc;

use ah_api::state::AppState;
use ah_core::repositories::contact::MockContactRepository;
use ah_core::repositories::reset::MockResetTokenRepository;
use ah_core::repositories::token::MockRefreshTokenRepository;
use ah_core::repositories::user::MockUserRepository;
use ah_core::services::auth::{AuthService, AuthServiceConfig};
use ah_core::services::contact::ContactService;
use ah_core::services::token::{TokenService, TokenServiceConfig};
use ah_infra::LogMailer;
use ah_shared::config::{CookieConfig, Environment};

pub const ADMIN_SECRET: &str = "test-admin-secret";
pub const JWT_SECRET: &str = "test-jwt-secret";

pub type TestAppState = AppState<
    MockUserRepository,
    MockRefreshTokenRepository,
    MockResetTokenRepository,
    LogMailer,
    MockContactRepository,
>;

/// The app state plus direct handles on every repository so tests can seed
/// and inspect rows behind the API's back.
pub struct TestContext {
    pub state: web::Data<TestAppState>,
    pub users: Arc<MockUserRepository>,
    pub refresh_tokens: Arc<MockRefreshTokenRepository>,
    pub reset_tokens: Arc<MockResetTokenRepository>,
    pub contacts: Arc<MockContactRepository>,
}

pub fn test_context() -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let refresh_tokens = Arc::new(MockRefreshTokenRepository::new());
    let reset_tokens = Arc::new(MockResetTokenRepository::new());
    let contacts = Arc::new(MockContactRepository::new());

    let token_service = Arc::new(TokenService::new(
        refresh_tokens.clone(),
        TokenServiceConfig::new(JWT_SECRET),
    ));

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        token_service,
        reset_tokens.clone(),
        Arc::new(LogMailer::new("http://localhost:5173")),
        AuthServiceConfig {
            admin_secret: ADMIN_SECRET.to_string(),
            bcrypt_cost: 4,
        },
    ));

    let contact_service = Arc::new(ContactService::new(contacts.clone()));

    let state = web::Data::new(AppState {
        auth_service,
        contact_service,
        cookie: CookieConfig::for_environment(Environment::Development),
        jwt_secret: JWT_SECRET.to_string(),
    });

    TestContext {
        state,
        users,
        refresh_tokens,
        reset_tokens,
        contacts,
    }
}

/// Pull the refresh cookie out of a login/signup/refresh response
pub fn refresh_cookie_from<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .expect("response should set the refresh_token cookie")
        .into_owned()
}

/// JSON body for a signup request
pub fn signup_body(name: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "password": password,
        "adminSecret": ADMIN_SECRET,
    })
}
