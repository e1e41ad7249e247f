//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reclaimer: Removes expired cache entries at the configured interval

mod reclaimer;

pub use reclaimer::spawn_reclaimer;
