//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use portal_auth::{
    CredentialStore, LoginRateLimiter, PasswordValidator, SessionCookiePolicy, SessionManager,
    TokenService,
};
use portal_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Login, logout and refresh orchestration.
    pub session_manager: Arc<SessionManager>,
    /// Login attempt limiter, shared with the background sweeper.
    pub rate_limiter: Arc<LoginRateLimiter>,
    /// Password policy.
    pub password_validator: Arc<PasswordValidator>,
}

impl AppState {
    /// Wires the auth components from configuration and a credential store.
    pub fn new(config: AppConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let tokens = Arc::new(TokenService::new(&config.auth));
        let rate_limiter = Arc::new(LoginRateLimiter::new(&config.rate_limit));
        let cookie_policy = SessionCookiePolicy::new(config.cookie_secure(), tokens.refresh_ttl());

        let session_manager = Arc::new(SessionManager::new(
            tokens,
            credentials,
            Arc::clone(&rate_limiter),
            cookie_policy,
        ));

        Self {
            config: Arc::new(config),
            session_manager,
            rate_limiter,
            password_validator: Arc::new(PasswordValidator::new()),
        }
    }
}
