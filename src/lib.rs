//! TTL KV - An in-memory key-value cache server
//!
//! Stores opaque byte payloads under string keys for a fixed TTL and
//! reclaims expired entries with a background sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheConfig, TtlCache};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_reclaimer;
