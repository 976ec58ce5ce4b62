//! Login rate limiter.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use portal_core::config::RateLimitConfig;

use super::entry::RateLimitPolicy;
use super::store::{AttemptStore, MemoryAttemptStore};

/// Gates login attempts per identifier with a fixed-window counter.
#[derive(Debug, Clone)]
pub struct LoginRateLimiter {
    store: Arc<dyn AttemptStore>,
    policy: RateLimitPolicy,
}

impl LoginRateLimiter {
    /// Creates a limiter with an in-memory store sized from configuration.
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_store(
            Arc::new(MemoryAttemptStore::new(config.max_entries)),
            RateLimitPolicy::from(config),
        )
    }

    /// Creates a limiter over a caller-supplied store.
    pub fn with_store(store: Arc<dyn AttemptStore>, policy: RateLimitPolicy) -> Self {
        Self { store, policy }
    }

    /// Registers an attempt for `identifier`; returns whether it may proceed.
    pub fn check_limit(&self, identifier: &str) -> bool {
        self.check_limit_at(identifier, Utc::now())
    }

    /// [`check_limit`](Self::check_limit) evaluated at an explicit instant.
    pub fn check_limit_at(&self, identifier: &str, now: DateTime<Utc>) -> bool {
        let allowed = self.store.check_and_record(identifier, now, &self.policy);
        if allowed {
            debug!(
                identifier,
                remaining = self.remaining_attempts(identifier),
                "Login attempt admitted"
            );
        } else {
            warn!(identifier, "Login attempt rejected: rate limit exceeded");
        }
        allowed
    }

    /// Attempts left for `identifier` in its current window.
    ///
    /// An untracked identifier has the full allowance. Window expiry is
    /// only applied by the next [`check_limit`](Self::check_limit) or sweep.
    pub fn remaining_attempts(&self, identifier: &str) -> u32 {
        self.store
            .get(identifier)
            .map_or(self.policy.max_attempts, |entry| {
                entry.remaining(&self.policy)
            })
    }

    /// Drops every counter whose window has elapsed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    /// [`purge_expired`](Self::purge_expired) evaluated at an explicit instant.
    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        self.store.purge_expired(now, self.policy.window)
    }

    /// Number of identifiers currently tracked.
    pub fn tracked_identifiers(&self) -> usize {
        self.store.len()
    }

    /// Active policy.
    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }
}
