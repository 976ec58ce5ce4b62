//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password policy check request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordCheckRequest {
    /// Candidate password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
}
