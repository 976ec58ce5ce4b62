//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_auth::{PasswordStrength, TokenPayload};
use portal_auth::password::StrengthLabel;
use portal_entity::user::UserRole;

/// Body returned by login and refresh. The refresh token travels in the
/// cookie only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Access token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Identity of the current caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

impl From<TokenPayload> for MeResponse {
    fn from(payload: TokenPayload) -> Self {
        Self {
            id: payload.id,
            username: payload.username,
            role: payload.role,
        }
    }
}

/// Policy verdict and strength score for a candidate password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordCheckResponse {
    /// Whether every policy rule passes.
    pub valid: bool,
    /// First violated rule, or `None` when valid.
    pub message: Option<String>,
    /// Strength score, 0 to 100.
    pub score: u8,
    /// Strength bucket.
    pub label: StrengthLabel,
}

impl PasswordCheckResponse {
    /// Combines a policy verdict with a strength estimate.
    pub fn new(violation: Option<String>, strength: PasswordStrength) -> Self {
        Self {
            valid: violation.is_none(),
            message: violation,
            score: strength.score,
            label: strength.label,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Server version.
    pub version: String,
}
