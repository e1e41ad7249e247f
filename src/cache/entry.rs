//! Cache Entry Module
//!
//! Defines the immutable value + expiration pair stored under each key.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::MAX_DURATION;

// == Entry ==
/// A single stored value paired with its absolute expiration time.
///
/// Entries are never mutated after construction. A Put replaces the whole
/// entry, so readers holding a clone always observe a consistent pair.
#[derive(Debug, Clone)]
pub struct Entry {
    value: Bytes,
    expires_at: Instant,
}

impl Entry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    ///
    /// A `ttl` too large to add to the current instant is capped at
    /// [`MAX_DURATION`].
    pub fn new(value: impl Into<Bytes>, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .unwrap_or_else(|| now + MAX_DURATION);
        Self::with_expiration(value, expires_at)
    }

    /// Creates an entry with an explicit expiration instant.
    pub fn with_expiration(value: impl Into<Bytes>, expires_at: Instant) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Returns the stored payload. Cloning `Bytes` is a refcount bump.
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    pub fn into_value(self) -> Bytes {
        self.value
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    // == Is Expired ==
    /// Checks the entry against a captured timestamp.
    ///
    /// An entry is expired only when its expiration is strictly before `now`.
    /// An entry expiring exactly at `now` survives.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at < now
    }

    /// Checks the entry against the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    // == Remaining TTL ==
    /// Time left before the entry expires, zero once it has.
    pub fn remaining_ttl(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
