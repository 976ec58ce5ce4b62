//! # portal-auth
//!
//! Authentication core for the bank portal.
//!
//! ## Modules
//!
//! - `credential`: static credential table lookup
//! - `jwt`: signed access/refresh token issuance and verification
//! - `rate_limit`: fixed-window login attempt limiting with a bounded store
//! - `password`: Argon2 hashing, password policy and strength scoring
//! - `session`: login / logout / refresh orchestration and cookie policy

pub mod credential;
pub mod jwt;
pub mod password;
pub mod rate_limit;
pub mod session;

pub use credential::{CredentialStore, StaticCredentialStore};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenPayload, TokenService};
pub use password::{PasswordHasher, PasswordStrength, PasswordValidator};
pub use rate_limit::{AttemptStore, LoginRateLimiter, MemoryAttemptStore, RateLimitSweeper};
pub use session::{LoginOutcome, SessionCookiePolicy, SessionManager};
