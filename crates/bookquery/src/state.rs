//! Application state.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see the catalog trait object; the
//! storage and cache backends behind it are chosen via feature flags.

use std::sync::Arc;
use std::time::Duration;

use bookquery_core::catalog::BookCatalog;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside catalog over the configured store.
    pub catalog: Arc<dyn BookCatalog>,
    /// Timeout applied to every request by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState around an already built catalog.
    pub fn build(catalog: Arc<dyn BookCatalog>, config: &Config) -> Self {
        Self {
            catalog,
            request_timeout: config.request_timeout(),
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::CacheAsideCatalog;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let catalog = Arc::new(CacheAsideCatalog::new(
                sqlite_repo,
                memory_cache,
                config.cache_ttl(),
            ));

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with in-memory cache");
            Ok(Self::build(catalog, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::cached::CacheAsideCatalog;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let catalog = Arc::new(CacheAsideCatalog::new(
                sqlite_repo,
                redis_cache,
                config.cache_ttl(),
            ));

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with Redis cache");
            Ok(Self::build(catalog, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::CacheAsideCatalog;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local runs without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let catalog = Arc::new(CacheAsideCatalog::new(
                inmemory_repo,
                memory_cache,
                config.cache_ttl(),
            ));

            tracing::info!("Using in-memory storage with in-memory cache");
            Ok(Self::build(catalog, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::cached::CacheAsideCatalog;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            let catalog = Arc::new(CacheAsideCatalog::new(
                inmemory_repo,
                redis_cache,
                config.cache_ttl(),
            ));

            tracing::info!("Using in-memory storage with Redis cache");
            Ok(Self::build(catalog, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
