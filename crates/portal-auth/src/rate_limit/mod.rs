//! Fixed-window login attempt limiting.
//!
//! Attempts are counted per identifier inside a window that starts at the
//! first attempt. Once the window is older than the configured length, the
//! next check starts a new one. Counters live in an injectable
//! [`AttemptStore`]; the default [`MemoryAttemptStore`] is bounded and swept
//! periodically by [`RateLimitSweeper`].

pub mod entry;
pub mod limiter;
pub mod store;
pub mod sweeper;

pub use entry::{RateLimitEntry, RateLimitPolicy};
pub use limiter::LoginRateLimiter;
pub use store::{AttemptStore, MemoryAttemptStore};
pub use sweeper::RateLimitSweeper;
