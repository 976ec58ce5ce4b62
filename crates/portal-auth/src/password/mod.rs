//! Password hashing, policy enforcement and strength scoring.

pub mod hasher;
pub mod strength;
pub mod validator;

pub use hasher::PasswordHasher;
pub use strength::{PasswordStrength, StrengthLabel};
pub use validator::PasswordValidator;
