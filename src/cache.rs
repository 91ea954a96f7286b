//! Time-bounded memoization of idempotent GET results.
//!
//! DESIGN
//! ======
//! Entries are keyed by the normalized parameter string and expire after a
//! fixed TTL; expiry is the only invalidation. Only `Success` and `Empty`
//! outcomes are stored — a transient failure must not be pinned for a full
//! TTL. Time-dependent paths take an explicit `Instant` internally so tests
//! never sleep.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::outcome::{ApiResult, Payload};

/// Cacheable subset of [`ApiResult`].
#[derive(Debug, Clone)]
pub enum CachedOutcome {
    Success(Payload),
    Empty,
}

impl CachedOutcome {
    /// Extract the cacheable part of a submission outcome, if any.
    #[must_use]
    pub fn from_result(result: &ApiResult) -> Option<Self> {
        match result {
            ApiResult::Success(payload) => Some(Self::Success(payload.clone())),
            ApiResult::Empty => Some(Self::Empty),
            ApiResult::Failure(_) => None,
        }
    }
}

impl From<CachedOutcome> for ApiResult {
    fn from(outcome: CachedOutcome) -> Self {
        match outcome {
            CachedOutcome::Success(payload) => Self::Success(payload),
            CachedOutcome::Empty => Self::Empty,
        }
    }
}

struct CacheEntry {
    outcome: CachedOutcome,
    stored_at: Instant,
}

/// TTL memo cache shared by clones of a panel.
#[derive(Clone)]
pub struct ResultCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl ResultCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { entries: Arc::new(Mutex::new(HashMap::new())), ttl }
    }

    /// Fresh entry for `key`, or `None` (expired entries are dropped).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<CachedOutcome> {
        self.get_at(key, Instant::now())
    }

    pub fn insert(&self, key: String, outcome: CachedOutcome) {
        self.insert_at(key, outcome, Instant::now());
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<CachedOutcome> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match entries.get(key) {
            Some(entry) if now.duration_since(entry.stored_at) < self.ttl => Some(entry.outcome.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert_at(&self, key: String, outcome: CachedOutcome, now: Instant) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, CacheEntry { outcome, stored_at: now });
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
