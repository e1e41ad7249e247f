//! Cache Store Module
//!
//! Concurrent key-to-entry mapping backed by a sharded `DashMap`.

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::trace;

use crate::cache::Entry;

// == Visit ==
/// Decision returned by a [`Store::range`] visitor for the current pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Keep,
    Remove,
}

// == Store ==
/// Thread-safe storage of key/entry pairs.
///
/// Every operation locks at most one shard, and only for the duration of
/// that shard's work. There is no lock spanning the whole map, so readers
/// and writers on other shards proceed while a sweep is running.
#[derive(Debug, Default)]
pub struct Store {
    entries: DashMap<String, Entry>,
}

impl Store {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `entry` under `key`, replacing any previous entry wholesale.
    pub fn insert(&self, key: impl Into<String>, entry: Entry) {
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns a clone of the entry for `key`, expired or not.
    ///
    /// The shard guard is released before returning.
    pub fn get(&self, key: &str) -> Option<Entry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present. Absent keys are a no-op.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Range ==
    /// Visits every pair currently stored, in unspecified order.
    ///
    /// The visitor decides per pair whether it stays. Shards are locked one at
    /// a time, so a pair removed here is never visited twice and concurrent
    /// Put/Get on other shards are not blocked by the scan.
    pub fn range<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &Entry) -> Visit,
    {
        self.entries
            .retain(|key, entry| visit(key.as_str(), entry) == Visit::Keep);
    }

    // == Remove Expired ==
    /// Runs one sweep against a single captured timestamp.
    ///
    /// Only entries whose own expiration is strictly before `now` are removed;
    /// an entry written with a later expiration survives even if the write
    /// lands mid-sweep. Returns the number of entries removed.
    pub fn remove_expired(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.range(|key, entry| {
            if entry.is_expired_at(now) {
                trace!(key, "Expired entry reclaimed");
                removed += 1;
                Visit::Remove
            } else {
                Visit::Keep
            }
        });
        removed
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Number of physically stored entries, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
