//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use portal_api::{AppState, build_app};
use portal_auth::{PasswordHasher, StaticCredentialStore};
use portal_core::config::AppConfig;
use portal_entity::user::{User, UserRole};

/// Plaintext password of every fixture user.
pub const PASSWORD: &str = "Corr3ct!Horse";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

/// Captured response
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body (`Null` if not JSON)
    pub body: Value,
    /// Raw `Set-Cookie` header, if any
    pub set_cookie: Option<String>,
}

impl TestResponse {
    /// Value of the `refreshToken` cookie set by this response.
    pub fn refresh_cookie(&self) -> Option<String> {
        let header = self.set_cookie.as_deref()?;
        let pair = header.split(';').next()?;
        pair.strip_prefix("refreshToken=").map(str::to_string)
    }

    /// `error` field of an error body.
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

impl TestApp {
    /// Create a new test application in the development environment
    pub fn new() -> Self {
        Self::with_config(test_config("development"))
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let store = StaticCredentialStore::new(fixture_users()).expect("Failed to build store");
        let state = AppState::new(config.clone(), Arc::new(store));

        Self {
            router: build_app(state),
            config,
        }
    }

    /// Send a request through the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        refresh_cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(cookie) = refresh_cookie {
            req = req.header(COOKIE, format!("refreshToken={cookie}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }

    /// POST /login
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
            None,
        )
        .await
    }
}

/// Config with a fixed secret for the given environment
pub fn test_config(environment: &str) -> AppConfig {
    let mut config = AppConfig {
        environment: environment.to_string(),
        ..AppConfig::default()
    };
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config
}

/// alice (admin) and bob (user) with plaintext passwords, carol (staff)
/// with an Argon2 hash
pub fn fixture_users() -> Vec<User> {
    static HASHED: OnceLock<String> = OnceLock::new();
    let hashed = HASHED
        .get_or_init(|| {
            PasswordHasher::new()
                .hash_password(PASSWORD)
                .expect("Failed to hash password")
        })
        .clone();

    vec![
        User {
            id: "1".to_string(),
            username: "alice".to_string(),
            password: PASSWORD.to_string(),
            role: UserRole::Admin,
        },
        User {
            id: "2".to_string(),
            username: "bob".to_string(),
            password: PASSWORD.to_string(),
            role: UserRole::User,
        },
        User {
            id: "3".to_string(),
            username: "carol".to_string(),
            password: hashed,
            role: UserRole::Staff,
        },
    ]
}
