//! Session lifecycle: login, logout and refresh-token rotation.
//!
//! Sessions are stateless. The refresh token held in an HTTP-only cookie is
//! the only anchor; nothing is stored server-side.

pub mod cookie;
pub mod manager;

pub use cookie::{SameSite, SessionCookiePolicy};
pub use manager::{LoginOutcome, SessionManager};
