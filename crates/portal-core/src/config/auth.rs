//! Authentication configuration.

use serde::{Deserialize, Serialize};

use super::check_range;
use crate::error::AppError;

/// Insecure fallback signing secret used when none is configured.
///
/// Only acceptable for local development; the server logs a warning when
/// it is in effect.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// Longest accepted access token TTL (one day).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;
/// Longest accepted refresh token TTL.
pub const MAX_REFRESH_TTL_DAYS: u64 = 365;

/// Token, cookie and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for HMAC-SHA256 token signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token TTL in days. Also the refresh cookie max-age.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_days: u64,
    /// Forces the `Secure` cookie attribute on or off. Unset means
    /// "secure in production only".
    #[serde(default)]
    pub cookie_secure: Option<bool>,
    /// Path to the JSON credential table.
    #[serde(default = "default_users_file")]
    pub users_file: String,
}

impl AuthConfig {
    /// Whether the insecure built-in secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Rejects token lifetimes outside `1..=MAX_*`.
    pub fn validate(&self) -> Result<(), AppError> {
        check_range(
            "auth.jwt_access_ttl_minutes",
            self.jwt_access_ttl_minutes,
            MAX_ACCESS_TTL_MINUTES,
        )?;
        check_range(
            "auth.jwt_refresh_ttl_days",
            self.jwt_refresh_ttl_days,
            MAX_REFRESH_TTL_DAYS,
        )
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            jwt_refresh_ttl_days: default_refresh_ttl(),
            cookie_secure: None,
            users_file: default_users_file(),
        }
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_users_file() -> String {
    "data/users.json".to_string()
}
