//! Password strength scoring.
//!
//! Four criteria contribute 25 points each: length of at least eight
//! characters, an uppercase letter, a digit, and a special character.

use serde::{Deserialize, Serialize};

use super::validator::{MIN_LENGTH, has_special_character};

/// Coarse strength bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    /// Score ≤ 25.
    Weak,
    /// Score ≤ 50.
    Fair,
    /// Score ≤ 75.
    Good,
    /// Score of 100.
    Strong,
}

impl StrengthLabel {
    fn from_score(score: u8) -> Self {
        match score {
            0..=25 => Self::Weak,
            26..=50 => Self::Fair,
            51..=75 => Self::Good,
            _ => Self::Strong,
        }
    }
}

/// Strength estimate for a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Score in steps of 25, from 0 to 100.
    pub score: u8,
    /// Bucket for the score.
    pub label: StrengthLabel,
}

impl PasswordStrength {
    /// Scores `password`.
    pub fn evaluate(password: &str) -> Self {
        let criteria = [
            password.chars().count() >= MIN_LENGTH,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            has_special_character(password),
        ];
        let score = criteria.iter().filter(|met| **met).count() as u8 * 25;

        Self {
            score,
            label: StrengthLabel::from_score(score),
        }
    }
}
