use std::{env, num::NonZeroUsize, str::FromStr, time::Duration};

use thiserror::Error;

const DEFAULT_CACHE_MAX_ENTRIES: NonZeroUsize = NonZeroUsize::new(10_000).unwrap();

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    pub cache_max_entries: NonZeroUsize,
    /// Path to SQLite database file (default: "bookquery.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Snapshot TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries, non-zero (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "bookquery.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            cache_ttl_seconds: parse_positive(
                &lookup,
                "CACHE_TTL_SECONDS",
                defaults.cache_ttl_seconds,
            )?,
            cache_max_entries: parse_var(
                &lookup,
                "CACHE_MAX_ENTRIES",
                defaults.cache_max_entries,
                "a positive integer",
            )?,
            sqlite_path: lookup("SQLITE_PATH").unwrap_or(defaults.sqlite_path),
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            request_timeout_seconds: parse_positive(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            )?,
        })
    }

    /// Get the snapshot TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: 300,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            sqlite_path: "bookquery.db".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value,
            expected,
        }),
    }
}

fn parse_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    let value = parse_var(lookup, name, default, "a positive integer")?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            name,
            value: "0".to_string(),
            expected: "a positive integer",
        });
    }
    Ok(value)
}
