//! Integration tests for the password reset token lifecycle

mod common;

use actix_web::test;

use ah_api::app::create_app;
use common::{refresh_cookie_from, signup_body, test_context};

#[actix_web::test]
async fn test_full_reset_flow_revokes_every_session() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // Open two sessions for the account.
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    let signup_resp = test::call_service(&app, req).await;
    let first_cookie = refresh_cookie_from(&signup_resp);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({"email": "a@x.com", "password": "Passw0rd!"}))
        .to_request();
    let login_resp = test::call_service(&app, req).await;
    let second_cookie = refresh_cookie_from(&login_resp);

    // Request the reset.
    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(serde_json::json!({"email": "a@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "If an account with that email exists, a reset link has been sent."
    );

    // The mailer is a sink; tests read the issued token from the store.
    let token = ctx.reset_tokens.tokens_for_email("a@x.com").await[0]
        .token
        .clone();

    // The link validity probe agrees it is live.
    let req = test::TestRequest::get()
        .uri(&format!("/api/auth/verify-reset-token/{}", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["valid"], true);

    // Consume it.
    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(serde_json::json!({"token": token, "newPassword": "NewPassw0rd!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password reset successfully");

    // The link is now dead.
    let req = test::TestRequest::get()
        .uri(&format!("/api/auth/verify-reset-token/{}", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["valid"], false);

    // Both sessions opened before the reset are revoked.
    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(first_cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(second_cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Only the new password logs in.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({"email": "a@x.com", "password": "Passw0rd!"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({"email": "a@x.com", "password": "NewPassw0rd!"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_forgot_password_is_enumeration_resistant() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(serde_json::json!({"email": "nobody@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Same 200 and message as for a real account, and no token row behind it.
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "If an account with that email exists, a reset link has been sent."
    );
    assert!(ctx.reset_tokens.tokens_for_email("nobody@x.com").await.is_empty());
}

#[actix_web::test]
async fn test_forgot_password_requires_email() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email is required");
}

#[actix_web::test]
async fn test_reset_password_validation() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // Missing fields
    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(serde_json::json!({"token": "x"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Token and newPassword are required");

    // Unknown token
    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(serde_json::json!({"token": "never-issued", "newPassword": "NewPassw0rd!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid or expired reset token");
}

#[actix_web::test]
async fn test_new_reset_link_invalidates_the_previous_one() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(signup_body("Admin", "a@x.com", "Passw0rd!"))
        .to_request();
    test::call_service(&app, req).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/auth/forgot-password")
            .set_json(serde_json::json!({"email": "a@x.com"}))
            .to_request();
        test::call_service(&app, req).await;
    }

    let tokens = ctx.reset_tokens.tokens_for_email("a@x.com").await;
    assert_eq!(tokens.len(), 2);
    let (newest, superseded) = (&tokens[0].token, &tokens[1].token);

    let req = test::TestRequest::get()
        .uri(&format!("/api/auth/verify-reset-token/{}", superseded))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["valid"], false);

    let req = test::TestRequest::get()
        .uri(&format!("/api/auth/verify-reset-token/{}", newest))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["valid"], true);

    // The superseded link cannot reset the password.
    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(serde_json::json!({"token": superseded, "newPassword": "NewPassw0rd!"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}
