//! Token payload and JWT claims used in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portal_entity::user::{User, UserRole};

/// Identity claims carried by every token.
///
/// Access and refresh tokens issued together embed the same payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// User ID.
    pub id: String,
    /// User role at the time of issuance.
    pub role: UserRole,
    /// Username for convenience.
    pub username: String,
}

impl From<&User> for TokenPayload {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            role: user.role,
            username: user.username.clone(),
        }
    }
}

/// Full JWT claim set: identity payload plus registered claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity payload, flattened into the top-level claim object.
    #[serde(flatten)]
    pub payload: TokenPayload,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token ID. Makes every issued token a distinct artifact.
    pub jti: Uuid,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new token pairs.
    Refresh,
}

impl Claims {
    /// Builds a claim set for `payload` valid from `now` for `ttl`.
    pub fn new(
        payload: &TokenPayload,
        token_type: TokenType,
        now: DateTime<Utc>,
        ttl: chrono::Duration,
    ) -> Self {
        Self {
            payload: payload.clone(),
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4(),
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
