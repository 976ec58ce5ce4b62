//! Password hashing for the credential table.
//!
//! A table row stores either a plaintext password or an Argon2id PHC
//! string produced by `portal-cli hash-password`. [`User::has_hashed_password`]
//! decides which comparison a login attempt gets.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::error;

use portal_core::error::AppError;
use portal_entity::user::User;

/// Memory cost in KiB for newly hashed table entries.
const MEMORY_COST_KIB: u32 = 19_456;
/// Iterations for newly hashed table entries.
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// Produces PHC strings for table rows and checks login attempts against rows.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
            .unwrap_or_default();
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hashes `password` into a PHC string suitable for the `password`
    /// column of the credential table.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| AppError::internal(format!("Failed to hash table password: {e}")))
    }

    /// Whether `password` is the password recorded for `user`.
    ///
    /// Plaintext rows compare exactly. Hashed rows are verified with the
    /// parameters embedded in their PHC string; a row whose hash cannot be
    /// parsed never matches and is logged.
    pub fn verify_credential(&self, user: &User, password: &str) -> bool {
        if !user.has_hashed_password() {
            return user.password == password;
        }

        let outcome = PasswordHash::new(&user.password)
            .and_then(|phc| self.argon2.verify_password(password.as_bytes(), &phc));
        match outcome {
            Ok(()) => true,
            Err(password_hash::Error::Password) => false,
            Err(e) => {
                error!(username = %user.username, error = %e, "Stored password hash is unusable");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
