//! Refresh-token cookie attributes.

use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the refresh token.
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// `SameSite` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// Attributes the HTTP layer applies to the refresh-token cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookiePolicy {
    /// Cookie name.
    pub name: String,
    /// Hidden from client-side scripts.
    pub http_only: bool,
    /// Only sent over HTTPS.
    pub secure: bool,
    /// Cross-site sending policy.
    pub same_site: SameSite,
    /// Cookie path.
    pub path: String,
    /// Lifetime in seconds; matches the refresh token TTL.
    pub max_age_seconds: i64,
}

impl SessionCookiePolicy {
    /// Builds the policy for a refresh token lifetime.
    pub fn new(secure: bool, refresh_ttl: chrono::Duration) -> Self {
        Self {
            name: REFRESH_COOKIE_NAME.to_string(),
            http_only: true,
            secure,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_seconds: refresh_ttl.num_seconds(),
        }
    }
}

impl Default for SessionCookiePolicy {
    fn default() -> Self {
        Self::new(false, chrono::Duration::days(7))
    }
}
