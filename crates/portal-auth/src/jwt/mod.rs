//! Token issuance and verification.
//!
//! [`TokenService`] pairs an encoder and a decoder built from one shared
//! secret. Access tokens live 15 minutes and refresh tokens 7 days unless
//! configured otherwise.

pub mod claims;
pub mod decoder;
pub mod encoder;

use portal_core::config::AuthConfig;
use portal_core::error::AppError;

pub use claims::{Claims, TokenPayload, TokenType};
pub use decoder::JwtDecoder;
pub use encoder::{JwtEncoder, TokenPair};

/// Signs and verifies tokens with a single shared secret.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Creates the service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Creates the service with explicit token lifetimes.
    pub fn with_ttls(
        secret: &str,
        access_ttl: chrono::Duration,
        refresh_ttl: chrono::Duration,
    ) -> Self {
        Self {
            encoder: JwtEncoder::with_ttls(secret, access_ttl, refresh_ttl),
            decoder: JwtDecoder::from_secret(secret),
        }
    }

    /// Signs a short-lived access token.
    pub fn sign_access_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        self.encoder.sign_access_token(payload).map(|(token, _)| token)
    }

    /// Signs a long-lived refresh token.
    pub fn sign_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError> {
        self.encoder.sign_refresh_token(payload).map(|(token, _)| token)
    }

    /// Issues an access + refresh pair carrying identical claims.
    pub fn issue_pair(&self, payload: &TokenPayload) -> Result<TokenPair, AppError> {
        self.encoder.generate_token_pair(payload)
    }

    /// Verifies signature and expiry; `None` for any invalid token.
    pub fn verify_token(&self, token: &str) -> Option<TokenPayload> {
        self.decoder.verify_token(token)
    }

    /// Verifies an access token.
    pub fn verify_access_token(&self, token: &str) -> Option<TokenPayload> {
        self.decoder.verify_access_token(token)
    }

    /// Verifies a refresh token.
    pub fn verify_refresh_token(&self, token: &str) -> Option<TokenPayload> {
        self.decoder.verify_refresh_token(token)
    }

    /// Decodes the full claim set of a valid token.
    pub fn inspect(&self, token: &str) -> Option<Claims> {
        self.decoder.decode_claims(token)
    }

    /// Refresh token lifetime.
    pub fn refresh_ttl(&self) -> chrono::Duration {
        self.encoder.refresh_ttl()
    }
}
