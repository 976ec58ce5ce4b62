//! Login attempt limiting configuration.

use serde::{Deserialize, Serialize};

use super::check_range;
use crate::error::AppError;

/// Longest accepted window (one day).
pub const MAX_WINDOW_MINUTES: u64 = 24 * 60;

/// Fixed-window login rate limit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Attempts allowed per identifier within one window.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Window length in minutes.
    #[serde(default = "default_window")]
    pub window_minutes: u64,
    /// Upper bound on tracked identifiers.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Interval between sweeps of expired windows, in seconds.
    /// `0` disables the background sweeper.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            window_minutes: default_window(),
            max_entries: default_max_entries(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

impl RateLimitConfig {
    /// Rejects a zero attempt budget, a zero capacity or a window outside
    /// `1..=MAX_WINDOW_MINUTES`.
    pub fn validate(&self) -> Result<(), AppError> {
        check_range("rate_limit.window_minutes", self.window_minutes, MAX_WINDOW_MINUTES)?;
        if self.max_attempts == 0 {
            return Err(AppError::configuration(
                "rate_limit.max_attempts must be at least 1",
            ));
        }
        if self.max_entries == 0 {
            return Err(AppError::configuration(
                "rate_limit.max_entries must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_max_attempts() -> u32 {
    5
}

fn default_window() -> u64 {
    15
}

fn default_max_entries() -> usize {
    100_000
}

fn default_sweep_interval() -> u64 {
    60
}
