//! Background sweep of expired rate-limit windows.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info};

use super::limiter::LoginRateLimiter;

/// Periodically purges expired counters so abandoned identifiers do not
/// accumulate.
#[derive(Debug, Clone)]
pub struct RateLimitSweeper {
    limiter: LoginRateLimiter,
    interval: Duration,
}

impl RateLimitSweeper {
    /// Creates a sweeper running every `interval`.
    pub fn new(limiter: LoginRateLimiter, interval: Duration) -> Self {
        Self { limiter, interval }
    }

    /// Runs a single sweep. Returns the number of counters removed.
    pub fn sweep_once(&self) -> usize {
        let removed = self.limiter.purge_expired();
        if removed > 0 {
            debug!(
                removed,
                remaining = self.limiter.tracked_identifiers(),
                "Swept expired rate limit windows"
            );
        }
        removed
    }

    /// Sweeps on every tick until `cancel` flips to `true` or its sender
    /// is dropped.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(interval_secs = self.interval.as_secs(), "Rate limit sweeper started");

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.sweep_once();
                }
            }
        }

        info!("Rate limit sweeper stopped");
    }
}
