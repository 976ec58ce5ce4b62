//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header and resolves it to the caller's identity.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use portal_auth::TokenPayload;
use portal_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity of an authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub TokenPayload);

impl std::ops::Deref for AuthUser {
    type Target = TokenPayload;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::token_missing("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::token_invalid("Invalid Authorization header format"))?;

        let payload = state.session_manager.authenticate(token.trim())?;

        Ok(AuthUser(payload))
    }
}
