//! Response models for the cache server API
//!
//! This module defines the DTOs serialized into JSON response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
