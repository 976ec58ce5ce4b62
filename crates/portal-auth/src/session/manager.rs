//! Session lifecycle manager: login, logout and refresh flows.

use std::sync::Arc;

use tracing::{debug, info, warn};

use portal_core::error::AppError;
use portal_entity::user::User;

use crate::credential::CredentialStore;
use crate::jwt::{TokenPair, TokenPayload, TokenService};
use crate::rate_limit::LoginRateLimiter;

use super::cookie::SessionCookiePolicy;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Freshly issued token pair.
    pub tokens: TokenPair,
    /// The authenticated user.
    pub user: User,
}

/// Orchestrates login, logout and refresh over the token service,
/// credential store and rate limiter.
#[derive(Debug, Clone)]
pub struct SessionManager {
    tokens: Arc<TokenService>,
    credentials: Arc<dyn CredentialStore>,
    limiter: Arc<LoginRateLimiter>,
    cookie_policy: SessionCookiePolicy,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        tokens: Arc<TokenService>,
        credentials: Arc<dyn CredentialStore>,
        limiter: Arc<LoginRateLimiter>,
        cookie_policy: SessionCookiePolicy,
    ) -> Self {
        Self {
            tokens,
            credentials,
            limiter,
            cookie_policy,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Count the attempt against the username's window
    /// 2. Look up the credentials
    /// 3. Issue an access + refresh pair
    ///
    /// Every attempt counts, successful or not.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let key = rate_limit_key(username);

        if !self.limiter.check_limit(&key) {
            let remaining = self.limiter.remaining_attempts(&key);
            let window = self.limiter.policy().window.num_minutes();
            return Err(AppError::rate_limited(format!(
                "Too many login attempts. Please try again in {window} minutes. Remaining attempts: {remaining}"
            )));
        }

        let Some(user) = self.credentials.find_user(username, password) else {
            warn!(
                username = %key,
                remaining = self.limiter.remaining_attempts(&key),
                "Login failed: invalid credentials"
            );
            return Err(AppError::authentication("Invalid credentials"));
        };

        let tokens = self.tokens.issue_pair(&TokenPayload::from(&user))?;

        info!(user_id = %user.id, role = %user.role, "Login successful");

        Ok(LoginOutcome { tokens, user })
    }

    /// Rotates a refresh token into a new pair carrying the same identity.
    ///
    /// The presented token stays valid until its own expiry.
    pub fn refresh(&self, refresh_token: Option<&str>) -> Result<TokenPair, AppError> {
        let token = refresh_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::token_missing("No refresh token provided"))?;

        let payload = self.tokens.verify_refresh_token(token).ok_or_else(|| {
            debug!("Refresh rejected");
            AppError::token_invalid("Invalid refresh token")
        })?;

        let pair = self.tokens.issue_pair(&payload)?;

        info!(user_id = %payload.id, "Token pair rotated");

        Ok(pair)
    }

    /// Ends the client session. Clearing the cookie is the caller's job;
    /// issued tokens are not revoked.
    pub fn logout(&self, refresh_token: Option<&str>) {
        match refresh_token.and_then(|t| self.tokens.verify_refresh_token(t)) {
            Some(payload) => info!(user_id = %payload.id, "Logout"),
            None => debug!("Logout without a valid session"),
        }
    }

    /// Resolves a bearer access token to its identity.
    pub fn authenticate(&self, access_token: &str) -> Result<TokenPayload, AppError> {
        self.tokens
            .verify_access_token(access_token)
            .ok_or_else(|| AppError::token_invalid("Invalid access token"))
    }

    /// Cookie attributes for the refresh token.
    pub fn cookie_policy(&self) -> &SessionCookiePolicy {
        &self.cookie_policy
    }
}

/// Attempts are counted per case-folded, trimmed username so trivial
/// variations share a window.
fn rate_limit_key(username: &str) -> String {
    username.trim().to_lowercase()
}
