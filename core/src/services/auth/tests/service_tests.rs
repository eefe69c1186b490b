//! Unit tests for the auth service

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::UserRepository;

use super::mocks::{harness, harness_with_mailer, MockMailer, TEST_ADMIN_SECRET};

#[tokio::test]
async fn test_signup_rejects_bad_admin_secret() {
    let h = harness();

    let result = h
        .auth
        .signup("Admin", "a@x.com", "Passw0rd!", "wrong-secret")
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidAdminSecret))
    ));
}

#[tokio::test]
async fn test_signup_creates_account_and_session() {
    let h = harness();

    let session = h
        .auth
        .signup("Admin", "A@X.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    // Email is case-folded, credentials never leave the service.
    assert_eq!(session.user.email, "a@x.com");
    assert_eq!(session.user.name, "Admin");
    assert!(!session.access_token.is_empty());
    assert!(!session.refresh_token.is_empty());

    let stored = h.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "Passw0rd!");
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts_case_insensitively() {
    let h = harness();
    h.auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    let result = h
        .auth
        .signup("Other", "A@X.COM", "Different1!", TEST_ADMIN_SECRET)
        .await;

    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_login_round_trip() {
    let h = harness();
    h.auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    let session = h.auth.login("a@x.com", "Passw0rd!").await.unwrap();
    assert_eq!(session.user.email, "a@x.com");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let h = harness();
    h.auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    let wrong_password = h.auth.login("a@x.com", "nope").await.unwrap_err();
    let unknown_email = h.auth.login("ghost@x.com", "nope").await.unwrap_err();

    // Same variant, same message: no account enumeration through errors.
    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_refresh_rotates_and_burns_the_old_token() {
    let h = harness();
    let session = h
        .auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    let rotated = h.auth.refresh(&session.refresh_token).await.unwrap();
    assert_ne!(rotated.refresh_token, session.refresh_token);
    assert!(!rotated.access_token.is_empty());

    // The original cookie value is spent.
    let replay = h.auth.refresh(&session.refresh_token).await;
    assert!(matches!(
        replay,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));

    // The rotated one still works.
    assert!(h.auth.refresh(&rotated.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_logout_revokes_only_the_presented_session() {
    let h = harness();
    let first = h
        .auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();
    let second = h.auth.login("a@x.com", "Passw0rd!").await.unwrap();

    h.auth.logout(&first.refresh_token).await.unwrap();

    assert!(h.auth.refresh(&first.refresh_token).await.is_err());
    assert!(h.auth.refresh(&second.refresh_token).await.is_ok());

    // Logging out twice is harmless.
    h.auth.logout(&first.refresh_token).await.unwrap();
}

#[tokio::test]
async fn test_forgot_password_issues_token_and_mails_link() {
    let h = harness();
    h.auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    h.auth.forgot_password("A@X.com").await.unwrap();

    let tokens = h.reset_tokens.tokens_for_email("a@x.com").await;
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_usable());

    let sent = h.mailer.sent.read().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "a@x.com");
    assert_eq!(sent[0].1, tokens[0].token);
}

#[tokio::test]
async fn test_forgot_password_unknown_email_is_silent() {
    let h = harness();

    h.auth.forgot_password("ghost@x.com").await.unwrap();

    assert!(h.reset_tokens.tokens_for_email("ghost@x.com").await.is_empty());
    assert_eq!(h.mailer.sent_count().await, 0);
}

#[tokio::test]
async fn test_forgot_password_swallows_delivery_failure() {
    let h = harness_with_mailer(MockMailer::failing());
    h.auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    // The caller still sees success; the token row still exists.
    h.auth.forgot_password("a@x.com").await.unwrap();
    assert_eq!(h.reset_tokens.tokens_for_email("a@x.com").await.len(), 1);
}

#[tokio::test]
async fn test_new_reset_token_supersedes_prior_ones() {
    let h = harness();
    h.auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    h.auth.forgot_password("a@x.com").await.unwrap();
    h.auth.forgot_password("a@x.com").await.unwrap();

    let tokens = h.reset_tokens.tokens_for_email("a@x.com").await;
    assert_eq!(tokens.len(), 2);

    // Only the newest is valid.
    let usable: Vec<_> = tokens.iter().filter(|t| t.is_usable()).collect();
    assert_eq!(usable.len(), 1);
    assert_eq!(usable[0].token, tokens[0].token);

    assert!(h.auth.verify_reset_token(&tokens[0].token).await.unwrap());
    assert!(!h.auth.verify_reset_token(&tokens[1].token).await.unwrap());
}

#[tokio::test]
async fn test_verify_reset_token_unknown_is_false() {
    let h = harness();
    assert!(!h.auth.verify_reset_token("never-issued").await.unwrap());
}

#[tokio::test]
async fn test_reset_password_updates_hash_and_revokes_sessions() {
    let h = harness();
    let session = h
        .auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();
    let other_session = h.auth.login("a@x.com", "Passw0rd!").await.unwrap();

    h.auth.forgot_password("a@x.com").await.unwrap();
    let token = h.reset_tokens.tokens_for_email("a@x.com").await[0]
        .token
        .clone();

    h.auth.reset_password(&token, "NewPassw0rd!").await.unwrap();

    // Old password dead, new one live.
    assert!(h.auth.login("a@x.com", "Passw0rd!").await.is_err());
    assert!(h.auth.login("a@x.com", "NewPassw0rd!").await.is_ok());

    // Every refresh token issued before the reset fails, including the
    // session that asked for it.
    assert!(h.auth.refresh(&session.refresh_token).await.is_err());
    assert!(h.auth.refresh(&other_session.refresh_token).await.is_err());
}

#[tokio::test]
async fn test_reset_token_is_single_use() {
    let h = harness();
    h.auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();
    h.auth.forgot_password("a@x.com").await.unwrap();
    let token = h.reset_tokens.tokens_for_email("a@x.com").await[0]
        .token
        .clone();

    h.auth.reset_password(&token, "NewPassw0rd!").await.unwrap();

    let replay = h.auth.reset_password(&token, "Another1!").await;
    assert!(matches!(
        replay,
        Err(DomainError::Validation(ValidationError::InvalidResetToken))
    ));
}

#[tokio::test]
async fn test_reset_password_rejects_garbage_token() {
    let h = harness();
    let result = h.auth.reset_password("never-issued", "NewPassw0rd!").await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::InvalidResetToken))
    ));
}

#[tokio::test]
async fn test_update_profile() {
    let h = harness();
    let session = h
        .auth
        .signup("Admin", "a@x.com", "Passw0rd!", TEST_ADMIN_SECRET)
        .await
        .unwrap();

    let renamed = h
        .auth
        .update_profile(session.user.id, "Renamed Admin")
        .await
        .unwrap();
    assert_eq!(renamed.name, "Renamed Admin");

    let missing = h.auth.update_profile(uuid::Uuid::new_v4(), "Nobody").await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}
