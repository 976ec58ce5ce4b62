//! Attempt counter storage.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use super::entry::{RateLimitEntry, RateLimitPolicy};

/// Storage for per-identifier attempt counters.
///
/// `check_and_record` must be atomic per identifier: concurrent attempts
/// for the same identifier may not lose updates.
pub trait AttemptStore: Send + Sync + fmt::Debug {
    /// Registers an attempt for `identifier` at `now`; returns whether it
    /// is allowed under `policy`.
    fn check_and_record(
        &self,
        identifier: &str,
        now: DateTime<Utc>,
        policy: &RateLimitPolicy,
    ) -> bool;

    /// Current counter for `identifier`, if tracked.
    fn get(&self, identifier: &str) -> Option<RateLimitEntry>;

    /// Removes every entry whose window is older than `window` at `now`.
    /// Returns the number removed.
    fn purge_expired(&self, now: DateTime<Utc>, window: Duration) -> usize;

    /// Number of tracked identifiers.
    fn len(&self) -> usize;

    /// Whether no identifier is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory bounded store backed by a sharded concurrent map.
///
/// Updates to one identifier are serialized by the shard lock. New
/// identifiers are admitted one at a time under `admission`, so the size
/// check, any eviction and the insert happen as one step and the store
/// never holds more than `max_entries`. When the store is full, expired
/// windows are purged first; if that frees nothing, the entry with the
/// oldest window is evicted.
#[derive(Debug)]
pub struct MemoryAttemptStore {
    entries: DashMap<String, RateLimitEntry>,
    admission: Mutex<()>,
    max_entries: usize,
}

impl MemoryAttemptStore {
    /// Creates a store holding at most `max_entries` identifiers.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            admission: Mutex::new(()),
            max_entries: max_entries.max(1),
        }
    }

    fn make_room(&self, now: DateTime<Utc>, window: Duration) {
        let purged = self.purge_expired(now, window);
        if self.entries.len() < self.max_entries {
            return;
        }

        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().window_start)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            debug!(purged, evicted = %key, "Rate limit store full; evicted oldest window");
        }
    }
}

impl AttemptStore for MemoryAttemptStore {
    fn check_and_record(
        &self,
        identifier: &str,
        now: DateTime<Utc>,
        policy: &RateLimitPolicy,
    ) -> bool {
        if let Some(mut entry) = self.entries.get_mut(identifier) {
            return entry.register_attempt(now, policy);
        }

        let _admission = self.admission.lock();

        // Another caller may have admitted the identifier while we waited.
        if let Some(mut entry) = self.entries.get_mut(identifier) {
            return entry.register_attempt(now, policy);
        }

        if self.entries.len() >= self.max_entries {
            self.make_room(now, policy.window);
        }
        self.entries
            .insert(identifier.to_string(), RateLimitEntry::new(now));
        true
    }

    fn get(&self, identifier: &str) -> Option<RateLimitEntry> {
        self.entries.get(identifier).map(|entry| *entry.value())
    }

    fn purge_expired(&self, now: DateTime<Utc>, window: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, window));
        before.saturating_sub(self.entries.len())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
