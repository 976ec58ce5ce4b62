//! Per-identifier attempt counter.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use portal_core::config::RateLimitConfig;
use portal_core::config::rate_limit::MAX_WINDOW_MINUTES;

/// Limits applied to every identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Attempts allowed within one window. Always at least 1.
    pub max_attempts: u32,
    /// Window length.
    pub window: Duration,
}

impl RateLimitPolicy {
    /// Creates a policy; `max_attempts` is clamped to at least 1.
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            window,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new(5, Duration::minutes(15))
    }
}

impl From<&RateLimitConfig> for RateLimitPolicy {
    fn from(config: &RateLimitConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::minutes(config.window_minutes.min(MAX_WINDOW_MINUTES) as i64),
        )
    }
}

/// Attempt counter for one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitEntry {
    /// Attempts counted in the current window.
    pub attempt_count: u32,
    /// When the current window opened.
    pub window_start: DateTime<Utc>,
}

impl RateLimitEntry {
    /// Opens a new window at `now` with one attempt counted.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            attempt_count: 1,
            window_start: now,
        }
    }

    /// Whether the window is strictly older than `window` at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now.signed_duration_since(self.window_start) > window
    }

    /// Registers an attempt at `now` and reports whether it is allowed.
    ///
    /// An expired window is reset with this attempt as its first. Within a
    /// live window the counter grows until it reaches the limit; rejected
    /// attempts are not counted.
    pub fn register_attempt(&mut self, now: DateTime<Utc>, policy: &RateLimitPolicy) -> bool {
        if self.is_expired(now, policy.window) {
            *self = Self::new(now);
            return true;
        }

        if self.attempt_count < policy.max_attempts {
            self.attempt_count += 1;
            true
        } else {
            false
        }
    }

    /// Attempts left before the limit, never negative.
    pub fn remaining(&self, policy: &RateLimitPolicy) -> u32 {
        policy.max_attempts.saturating_sub(self.attempt_count)
    }
}
