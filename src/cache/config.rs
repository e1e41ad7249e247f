//! Configuration for the cache engine.

use std::time::Duration;

/// Default lifetime granted to every Put.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10);

/// Default period between reclaimer sweeps.
pub const DEFAULT_EVICTION_INTERVAL: Duration = Duration::from_secs(2);

/// Smallest accepted sweep period; tokio intervals reject a zero period.
pub const MIN_EVICTION_INTERVAL: Duration = Duration::from_millis(1);

/// Longest accepted TTL or sweep period (30 years). Larger values would
/// overflow when added to the current instant.
pub const MAX_DURATION: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Fixed-at-construction settings of a [`TtlCache`](super::TtlCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Lifetime granted to every Put
    pub ttl: Duration,

    /// Period between background sweeps
    pub eviction_interval: Duration,

    /// Report expired but not yet reclaimed entries as missing on Get
    pub check_expiry_on_read: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            eviction_interval: DEFAULT_EVICTION_INTERVAL,
            check_expiry_on_read: false,
        }
    }
}

impl CacheConfig {
    /// Sets the TTL applied to every Put
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the sweep period
    pub fn eviction_interval(mut self, interval: Duration) -> Self {
        self.eviction_interval = interval;
        self
    }

    /// Enables or disables lazy expiration on the read path
    pub fn check_expiry_on_read(mut self, enabled: bool) -> Self {
        self.check_expiry_on_read = enabled;
        self
    }

    /// TTL actually granted to each Put.
    pub fn effective_ttl(&self) -> Duration {
        self.ttl.min(MAX_DURATION)
    }

    /// Sweep period actually used by the reclaimer.
    pub fn effective_eviction_interval(&self) -> Duration {
        self.eviction_interval.clamp(MIN_EVICTION_INTERVAL, MAX_DURATION)
    }
}
