//! Integration tests for the authentication endpoints

mod common;

use actix_web::http::header;
use actix_web::test;

use ah_api::app::create_app;
use common::{refresh_cookie_from, signup_body, test_context};

#[actix_web::test]
async fn test_signup_creates_session_and_cookie() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);

    let cookie = refresh_cookie_from(&resp);
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["name"], "Admin");
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["accessToken"].as_str().is_some());
    // The refresh token travels only in the cookie.
    assert!(body.get("refreshToken").is_none());
}

#[actix_web::test]
async fn test_signup_validation_and_conflicts() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // Missing fields
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(serde_json::json!({"email": "a@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "All fields are required");

    // Wrong admin secret
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(serde_json::json!({
            "name": "Admin", "email": "a@x.com",
            "password": "Passw0rd!", "adminSecret": "wrong",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid admin secret");

    // Duplicate email (case-insensitive)
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Other", "A@X.COM", "Different1!"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "An account with this email already exists");
}

#[actix_web::test]
async fn test_login_success() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({"email": "a@x.com", "password": "Passw0rd!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let cookie = refresh_cookie_from(&resp);
    assert!(!cookie.value().is_empty());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["accessToken"].as_str().is_some());
}

#[actix_web::test]
async fn test_login_missing_fields() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({"email": "a@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email and password are required");
}

#[actix_web::test]
async fn test_login_failures_are_byte_identical() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({"email": "a@x.com", "password": "wrong"}))
        .to_request();
    let wrong_password = test::call_service(&app, req).await;
    let wrong_password_status = wrong_password.status();
    let wrong_password_body = test::read_body(wrong_password).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({"email": "ghost@x.com", "password": "wrong"}))
        .to_request();
    let unknown_email = test::call_service(&app, req).await;
    let unknown_email_status = unknown_email.status();
    let unknown_email_body = test::read_body(unknown_email).await;

    assert_eq!(wrong_password_status, 401);
    assert_eq!(wrong_password_status, unknown_email_status);
    assert_eq!(wrong_password_body, unknown_email_body);
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&wrong_password_body).unwrap()["error"],
        "Invalid email or password"
    );
}

#[actix_web::test]
async fn test_refresh_rotates_the_cookie() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    let signup_resp = test::call_service(&app, req).await;
    let original_cookie = refresh_cookie_from(&signup_resp);

    // Redeem the cookie: new access token, new cookie value.
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(original_cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let rotated_cookie = refresh_cookie_from(&resp);
    assert_ne!(rotated_cookie.value(), original_cookie.value());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["accessToken"].as_str().is_some());

    // The original cookie value was consumed by rotation.
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(original_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid or expired refresh token");

    // The rotated cookie still works.
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(rotated_cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_refresh_without_cookie() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/auth/refresh").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No refresh token provided");
}

#[actix_web::test]
async fn test_logout_revokes_and_clears() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    let signup_resp = test::call_service(&app, req).await;
    let cookie = refresh_cookie_from(&signup_resp);

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The response cookie is emptied to drop it from the browser.
    let cleared = refresh_cookie_from(&resp);
    assert!(cleared.value().is_empty());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logged out successfully");

    // The revoked session cannot refresh.
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Logout without any cookie is still a 200.
    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_protected_routes_require_bearer_token() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/contacts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing or invalid authorization header");

    let req = test::TestRequest::get()
        .uri("/api/contacts")
        .insert_header((header::AUTHORIZATION, "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid or expired access token");
}

#[actix_web::test]
async fn test_access_token_grants_access_to_protected_routes() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = body["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/contacts")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["contacts"].as_array().unwrap().len(), 0);
}
