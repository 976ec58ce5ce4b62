//! Integration tests for the login, logout and profile endpoints.

mod helpers;

use axum::http::StatusCode;
use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success_sets_refresh_cookie() {
    let app = TestApp::new();

    let response = app.login("alice", PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["accessToken"].as_str().is_some());
    assert!(response.body["expiresAt"].as_str().is_some());
    assert!(response.body.get("refreshToken").is_none());

    let cookie = response.set_cookie.clone().expect("missing Set-Cookie");
    assert!(cookie.starts_with("refreshToken="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));
    assert!(response.refresh_cookie().is_some_and(|c| !c.is_empty()));
}

#[tokio::test]
async fn test_login_with_hashed_password() {
    let app = TestApp::new();

    let response = app.login("carol", PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.login("carol", "Wr0ng!Horse").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new();

    let response = app.login("bob", "wrong").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, serde_json::json!({ "error": "Invalid credentials" }));
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new();

    let response = app.login("nobody", PASSWORD).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Invalid credentials");
}

#[tokio::test]
async fn test_login_username_is_case_sensitive() {
    let app = TestApp::new();

    let response = app.login("Alice", PASSWORD).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_empty_fields_rejected() {
    let app = TestApp::new();

    let response = app.login("", PASSWORD).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Username is required");

    let response = app.login("alice", "").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Password is required");
}

#[tokio::test]
async fn test_login_malformed_body_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "alice" })),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

#[tokio::test]
async fn test_production_cookie_is_secure() {
    let app = TestApp::with_config(helpers::test_config("production"));

    let response = app.login("alice", PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookie.unwrap_or_default().contains("Secure"));
}

#[tokio::test]
async fn test_me_returns_identity() {
    let app = TestApp::new();
    let login = app.login("bob", PASSWORD).await;
    let token = login.body["accessToken"].as_str().unwrap();

    let response = app.request("GET", "/me", None, Some(token), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({ "id": "2", "username": "bob", "role": "user" })
    );
}

#[tokio::test]
async fn test_me_requires_access_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/me", None, None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Missing Authorization header");

    let response = app
        .request("GET", "/me", None, Some("not-a-token"), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let login = app.login("bob", PASSWORD).await;
    let refresh = login.refresh_cookie().unwrap();
    let response = app.request("GET", "/me", None, Some(&refresh), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let login = app.login("alice", PASSWORD).await;
    let refresh = login.refresh_cookie().unwrap();

    let response = app
        .request("POST", "/logout", None, None, Some(&refresh))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "message": "Logged out" }));
    let cookie = response.set_cookie.expect("missing Set-Cookie");
    assert!(cookie.starts_with("refreshToken=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_logout_without_session_succeeds() {
    let app = TestApp::new();

    let response = app.request("POST", "/logout", None, None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Logged out");
}

#[tokio::test]
async fn test_password_check() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/password/check",
            Some(serde_json::json!({ "password": "weak" })),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["valid"], false);
    assert_eq!(
        response.body["message"],
        "Password must be at least 8 characters long"
    );
    assert_eq!(response.body["score"], 0);
    assert_eq!(response.body["label"], "Weak");

    let response = app
        .request(
            "POST",
            "/password/check",
            Some(serde_json::json!({ "password": PASSWORD })),
            None,
            None,
        )
        .await;
    assert_eq!(response.body["valid"], true);
    assert!(response.body["message"].is_null());
    assert_eq!(response.body["score"], 100);
    assert_eq!(response.body["label"], "Strong");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
