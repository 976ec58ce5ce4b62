//! Password policy handler.

use axum::Json;
use axum::extract::State;

use portal_auth::PasswordStrength;

use crate::dto::request::PasswordCheckRequest;
use crate::dto::response::PasswordCheckResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /password/check
pub async fn check(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PasswordCheckRequest>,
) -> Result<Json<PasswordCheckResponse>, ApiError> {
    let violation = state
        .password_validator
        .validate(&req.password)
        .err()
        .map(|e| e.message);

    Ok(Json(PasswordCheckResponse::new(
        violation,
        PasswordStrength::evaluate(&req.password),
    )))
}
