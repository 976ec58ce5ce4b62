//! Integration tests for login attempt limiting.

mod helpers;

use axum::http::StatusCode;
use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_sixth_failed_login_is_rate_limited() {
    let app = TestApp::new();

    for _ in 0..5 {
        let response = app.login("bob", "wrong").await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error(), "Invalid credentials");
    }

    let response = app.login("bob", "wrong").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error().starts_with("Too many login attempts"));
    assert!(response.error().ends_with("Remaining attempts: 0"));
}

#[tokio::test]
async fn test_correct_password_blocked_while_limited() {
    let app = TestApp::new();

    for _ in 0..5 {
        app.login("bob", "wrong").await;
    }

    let response = app.login("bob", PASSWORD).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error().ends_with("Remaining attempts: 0"));
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_successful_logins_count_toward_limit() {
    let app = TestApp::new();

    for _ in 0..5 {
        assert_eq!(app.login("alice", PASSWORD).await.status, StatusCode::OK);
    }

    let response = app.login("alice", PASSWORD).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error().starts_with("Too many login attempts"));
}

#[tokio::test]
async fn test_limits_are_per_username() {
    let app = TestApp::new();

    for _ in 0..6 {
        app.login("bob", "wrong").await;
    }

    let response = app.login("alice", PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_username_variants_share_a_window() {
    let app = TestApp::new();

    for username in ["bob", "BOB", " Bob", "bOb ", "Bob"] {
        app.login(username, "wrong").await;
    }

    let response = app.login("bob", PASSWORD).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error().starts_with("Too many login attempts"));
}

#[tokio::test]
async fn test_custom_attempt_limit() {
    let mut config = helpers::test_config("development");
    config.rate_limit.max_attempts = 2;
    let app = TestApp::with_config(config);

    app.login("bob", "wrong").await;
    app.login("bob", "wrong").await;

    let response = app.login("bob", "wrong").await;
    assert!(response.error().starts_with("Too many login attempts"));
}
