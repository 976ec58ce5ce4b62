//! Password policy enforcement.
//!
//! Rules are checked in a fixed order and the first violation is reported:
//! minimum length, a digit, an uppercase letter, a lowercase letter, and a
//! special character from [`SPECIAL_CHARACTERS`].

use portal_core::error::AppError;

/// Characters accepted as "special" by the policy.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length.
pub const MIN_LENGTH: usize = 8;

/// Validates passwords against the portal policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a validator with the default minimum length.
    pub fn new() -> Self {
        Self {
            min_length: MIN_LENGTH,
        }
    }

    /// Validates a password against all policy rules.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or a validation error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one number",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(AppError::validation(
                "Password must contain at least one uppercase letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(AppError::validation(
                "Password must contain at least one lowercase letter",
            ));
        }

        if !has_special_character(password) {
            return Err(AppError::validation(
                "Password must contain at least one special character",
            ));
        }

        Ok(())
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `password` contains a character from [`SPECIAL_CHARACTERS`].
pub fn has_special_character(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
