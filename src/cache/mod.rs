//! Cache Module
//!
//! Provides the concurrent in-memory store with fixed-TTL entries and the
//! aggregate that ties it to its background reclaimer.

mod config;
mod entry;
mod stats;
mod store;
mod ttl_cache;


// Re-export public types
pub use config::{
    CacheConfig, DEFAULT_EVICTION_INTERVAL, DEFAULT_TTL, MAX_DURATION, MIN_EVICTION_INTERVAL,
};
pub use entry::Entry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::{Store, Visit};
pub use ttl_cache::TtlCache;
