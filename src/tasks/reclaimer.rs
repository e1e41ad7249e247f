//! Reclaimer Task
//!
//! Background task that periodically removes expired entries from the store.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::{CacheStats, Store, MAX_DURATION};

/// Spawns the reclaimer loop for `store`.
///
/// The first sweep runs one `period` after the task starts. Each tick captures
/// the current time once and removes every entry expiring strictly before it.
/// The loop exits as soon as `token` is cancelled, whether it is waiting on
/// the ticker or not, and never sweeps again afterwards.
///
/// # Arguments
/// * `store` - Shared store to sweep
/// * `stats` - Counters updated after each sweep
/// * `period` - Time between sweeps, must be non-zero; capped at [`MAX_DURATION`]
/// * `token` - Cancellation signal ending the loop
///
/// # Example
/// ```ignore
/// let token = CancellationToken::new();
/// let handle = spawn_reclaimer(store, stats, Duration::from_secs(2), token.clone());
/// // Later, during shutdown:
/// token.cancel();
/// handle.await?;
/// ```
pub fn spawn_reclaimer(
    store: Arc<Store>,
    stats: Arc<CacheStats>,
    period: Duration,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = period.min(MAX_DURATION);
        info!("Starting reclaimer with interval of {:?}", period);

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    let removed = store.remove_expired(Instant::now());
                    stats.record_sweep(removed);

                    if removed > 0 {
                        info!("Sweep removed {} expired entries", removed);
                    } else {
                        debug!("Sweep found no expired entries");
                    }
                }
            }
        }

        info!("Reclaimer stopped");
    })
}
