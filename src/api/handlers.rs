//! API Handlers
//!
//! HTTP request handlers mapping requests onto cache Put/Get calls.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio_util::sync::CancellationToken;

use crate::cache::TtlCache;
use crate::error::Result;
use crate::models::{HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache is constructed once and injected here; handlers never reach
/// for a global instance.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<TtlCache>,
}

impl AppState {
    pub fn new(cache: TtlCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The cache's reclaimer stops when `shutdown` is cancelled.
    pub fn from_config(config: &crate::config::Config, shutdown: &CancellationToken) -> Self {
        Self::new(TtlCache::new(config.cache_config(), shutdown))
    }
}

/// Handler for GET /:key
///
/// Returns the stored payload as the raw response body.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Bytes> {
    state.cache.get(&key)
}

/// Handler for POST /:key and PUT /:key
///
/// Stores the raw request body under the key.
pub async fn put_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> StatusCode {
    state.cache.put(key, body);
    StatusCode::OK
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::error::CacheError;

    fn test_state() -> AppState {
        AppState::new(TtlCache::new(CacheConfig::default(), &CancellationToken::new()))
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = test_state();

        let status = put_handler(
            State(state.clone()),
            Path("test_key".to_string()),
            Bytes::from_static(b"test_value"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body = get_handler(State(state.clone()), Path("test_key".to_string()))
            .await
            .unwrap();
        assert_eq!(body, Bytes::from_static(b"test_value"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert_eq!(result, Err(CacheError::NotFound("nonexistent".to_string())));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        let _ = get_handler(State(state.clone()), Path("miss".to_string())).await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
