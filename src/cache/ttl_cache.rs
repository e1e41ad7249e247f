//! TTL Cache Module
//!
//! The cache aggregate: one store, one fixed TTL, and the reclaimer that
//! sweeps the store for as long as the cache lives.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::{CacheConfig, CacheStats, Entry, StatsSnapshot, Store};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reclaimer;

// == TTL Cache ==
/// In-memory key-value cache with a fixed TTL and background reclamation.
///
/// Every Put receives the same lifetime. Expired entries are physically
/// removed by a background sweep every `eviction_interval`. Until a sweep
/// reaches them, Get still returns them unless `check_expiry_on_read` is set.
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<Store>,
    stats: Arc<CacheStats>,
    config: CacheConfig,
    token: CancellationToken,
    reclaimer: Mutex<Option<JoinHandle<()>>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates the cache and starts its reclaimer.
    ///
    /// The reclaimer runs until `shutdown` is cancelled, [`close`](Self::close)
    /// is called, or the cache is dropped. Must be called from within a tokio
    /// runtime.
    pub fn new(config: CacheConfig, shutdown: &CancellationToken) -> Self {
        let store = Arc::new(Store::new());
        let stats = Arc::new(CacheStats::new());
        let token = shutdown.child_token();

        let handle = spawn_reclaimer(
            store.clone(),
            stats.clone(),
            config.effective_eviction_interval(),
            token.clone(),
        );

        Self {
            store,
            stats,
            config,
            token,
            reclaimer: Mutex::new(Some(handle)),
        }
    }

    // == Put ==
    /// Stores `value` under `key` with a fresh TTL, replacing any previous value.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        debug!(key = %key, "Put");
        self.store.insert(key, Entry::new(value, self.config.effective_ttl()));
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// Returns `CacheError::NotFound` if the key was never stored or has been
    /// reclaimed. An expired entry that has not been swept yet is returned as
    /// is, or reported as missing when `check_expiry_on_read` is enabled.
    pub fn get(&self, key: &str) -> Result<Bytes> {
        let entry = match self.store.get(key) {
            Some(entry) if !(self.config.check_expiry_on_read && entry.is_expired()) => entry,
            _ => {
                self.stats.record_miss();
                return Err(CacheError::NotFound(key.to_string()));
            }
        };

        self.stats.record_hit();
        debug!(key, remaining = ?entry.remaining_ttl(), "Hit");
        Ok(entry.into_value())
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.store.len())
    }

    pub fn ttl(&self) -> Duration {
        self.config.effective_ttl()
    }

    pub fn eviction_interval(&self) -> Duration {
        self.config.effective_eviction_interval()
    }

    // == Close ==
    /// Stops the reclaimer and waits for it to exit.
    ///
    /// Put and Get keep working afterwards, but nothing is reclaimed anymore.
    /// Calling this more than once is a no-op.
    pub async fn close(&self) {
        self.token.cancel();

        let handle = self.reclaimer.lock().await.take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!("Reclaimer task ended abnormally: {}", err);
            }
        }
    }

    /// Returns true once the reclaimer has been told to stop.
    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
