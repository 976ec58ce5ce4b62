//! JWT token creation with a shared signing secret and per-kind TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use portal_core::config::AuthConfig;
use portal_core::config::auth::{MAX_ACCESS_TTL_MINUTES, MAX_REFRESH_TTL_DAYS};
use portal_core::error::AppError;

use super::claims::{Claims, TokenPayload, TokenType};

/// Creates signed access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token lifetime.
    access_ttl: chrono::Duration,
    /// Refresh token lifetime.
    refresh_ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration. Lifetimes above the
    /// accepted maxima are capped.
    pub fn new(config: &AuthConfig) -> Self {
        let access_minutes = config.jwt_access_ttl_minutes.min(MAX_ACCESS_TTL_MINUTES);
        let refresh_days = config.jwt_refresh_ttl_days.min(MAX_REFRESH_TTL_DAYS);
        Self::with_ttls(
            &config.jwt_secret,
            chrono::Duration::minutes(access_minutes as i64),
            chrono::Duration::days(refresh_days as i64),
        )
    }

    /// Creates an encoder with explicit lifetimes.
    pub fn with_ttls(
        secret: &str,
        access_ttl: chrono::Duration,
        refresh_ttl: chrono::Duration,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Signs a short-lived access token for `payload`.
    pub fn sign_access_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        self.sign(payload, TokenType::Access, Utc::now())
    }

    /// Signs a long-lived refresh token for `payload`.
    pub fn sign_refresh_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        self.sign(payload, TokenType::Refresh, Utc::now())
    }

    /// Generates an access + refresh pair sharing the same payload and
    /// issue time.
    pub fn generate_token_pair(&self, payload: &TokenPayload) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let (access_token, access_expires_at) = self.sign(payload, TokenType::Access, now)?;
        let (refresh_token, refresh_expires_at) = self.sign(payload, TokenType::Refresh, now)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    /// Lifetime of refresh tokens; the session cookie max-age matches it.
    pub fn refresh_ttl(&self) -> chrono::Duration {
        self.refresh_ttl
    }

    fn sign(
        &self,
        payload: &TokenPayload,
        token_type: TokenType,
        now: DateTime<Utc>,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let claims = Claims::new(payload, token_type, now, ttl);
        let expires_at = claims.expires_at();

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal(format!("Failed to encode {token_type:?} token: {e}"))
        })?;

        Ok((token, expires_at))
    }
}
