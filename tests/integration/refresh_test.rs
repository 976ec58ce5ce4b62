//! Integration tests for refresh-token rotation.

mod helpers;

use axum::http::StatusCode;
use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = TestApp::new();

    let response = app.request("POST", "/refresh", None, None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": "No refresh token provided" })
    );
}

#[tokio::test]
async fn test_refresh_with_invalid_cookie() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/refresh", None, None, Some("garbage"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Invalid refresh token");
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new();
    let login = app.login("alice", PASSWORD).await;
    let access = login.body["accessToken"].as_str().unwrap();

    let response = app
        .request("POST", "/refresh", None, None, Some(access))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Invalid refresh token");
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let app = TestApp::new();
    let login = app.login("carol", PASSWORD).await;
    let original_access = login.body["accessToken"].as_str().unwrap().to_string();
    let original_refresh = login.refresh_cookie().unwrap();

    let response = app
        .request("POST", "/refresh", None, None, Some(&original_refresh))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let new_access = response.body["accessToken"].as_str().unwrap();
    let new_refresh = response.refresh_cookie().expect("rotated cookie");
    assert_ne!(new_access, original_access);
    assert_ne!(new_refresh, original_refresh);
    assert!(
        response
            .set_cookie
            .as_deref()
            .is_some_and(|c| c.contains("HttpOnly") && c.contains("Max-Age=604800"))
    );

    let me = app.request("GET", "/me", None, Some(new_access), None).await;
    assert_eq!(
        me.body,
        serde_json::json!({ "id": "3", "username": "carol", "role": "staff" })
    );
}

#[tokio::test]
async fn test_rotated_token_can_refresh_again() {
    let app = TestApp::new();
    let mut refresh = app.login("bob", PASSWORD).await.refresh_cookie().unwrap();

    for _ in 0..3 {
        let response = app
            .request("POST", "/refresh", None, None, Some(&refresh))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        refresh = response.refresh_cookie().unwrap();
    }
}

#[tokio::test]
async fn test_refresh_token_from_other_secret_rejected() {
    let app = TestApp::new();
    let mut other_config = helpers::test_config("development");
    other_config.auth.jwt_secret = "some-other-secret".to_string();
    let other = TestApp::with_config(other_config);

    let foreign = other.login("bob", PASSWORD).await.refresh_cookie().unwrap();

    let response = app
        .request("POST", "/refresh", None, None, Some(&foreign))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Invalid refresh token");
}

#[tokio::test]
async fn test_refresh_is_not_rate_limited() {
    let app = TestApp::new();
    let refresh = app.login("bob", PASSWORD).await.refresh_cookie().unwrap();

    for _ in 0..6 {
        app.login("bob", "wrong").await;
    }

    let response = app
        .request("POST", "/refresh", None, None, Some(&refresh))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
