//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds granted to every stored entry
    pub cache_ttl: u64,
    /// Interval in seconds between background sweeps
    pub eviction_interval: u64,
    /// Treat expired but not yet swept entries as missing on read
    pub check_expiry_on_read: bool,
    /// Address the HTTP server binds to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Values that are missing, unparsable, or zero where a duration is
    /// expected fall back to their defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds (default: 10)
    /// - `EVICTION_INTERVAL_SECS` - Sweep frequency in seconds (default: 2)
    /// - `CHECK_EXPIRY_ON_READ` - Hide expired entries on read (default: false)
    /// - `SERVER_HOST` - Bind address (default: 127.0.0.1)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 15)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_ttl: env_duration_secs("CACHE_TTL_SECS", defaults.cache_ttl),
            eviction_interval: env_duration_secs(
                "EVICTION_INTERVAL_SECS",
                defaults.eviction_interval,
            ),
            check_expiry_on_read: env_or("CHECK_EXPIRY_ON_READ", defaults.check_expiry_on_read),
            server_host: env_or("SERVER_HOST", defaults.server_host),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            request_timeout: env_duration_secs("REQUEST_TIMEOUT_SECS", defaults.request_timeout),
        }
    }

    /// Settings handed to the cache engine.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::default()
            .ttl(Duration::from_secs(self.cache_ttl))
            .eviction_interval(Duration::from_secs(self.eviction_interval))
            .check_expiry_on_read(self.check_expiry_on_read)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 10,
            eviction_interval: 2,
            check_expiry_on_read: false,
            server_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            server_port: 8000,
            request_timeout: 15,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_duration_secs(name: &str, default: u64) -> u64 {
    match env_or(name, default) {
        0 => default,
        secs => secs,
    }
}
