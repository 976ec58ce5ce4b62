//! JWT token validation.
//!
//! Every failure (bad signature, expiry, malformed input, wrong token kind)
//! collapses into `None`. Callers cannot tell an expired token from a
//! tampered one; the reason is only visible in debug logs.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use portal_core::config::AuthConfig;

use super::claims::{Claims, TokenPayload, TokenType};

/// Validates signed tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(&config.jwt_secret)
    }

    /// Creates a decoder for the given shared secret.
    pub fn from_secret(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies signature and expiry of a token of either kind.
    pub fn verify_token(&self, token: &str) -> Option<TokenPayload> {
        self.decode_claims(token).map(|claims| claims.payload)
    }

    /// Verifies a token and additionally requires it to be an access token.
    pub fn verify_access_token(&self, token: &str) -> Option<TokenPayload> {
        self.verify_kind(token, TokenType::Access)
    }

    /// Verifies a token and additionally requires it to be a refresh token.
    pub fn verify_refresh_token(&self, token: &str) -> Option<TokenPayload> {
        self.verify_kind(token, TokenType::Refresh)
    }

    /// Decodes and validates the full claim set.
    pub fn decode_claims(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(reason = ?e.kind(), "Token rejected");
                None
            }
        }
    }

    fn verify_kind(&self, token: &str, expected: TokenType) -> Option<TokenPayload> {
        let claims = self.decode_claims(token)?;
        if claims.token_type != expected {
            debug!(
                expected = ?expected,
                actual = ?claims.token_type,
                "Token rejected: wrong token type"
            );
            return None;
        }
        Some(claims.payload)
    }
}
