//! Cached catalog decorator.
//!
//! [`CacheAsideCatalog`] implements the cache-aside pattern over a single
//! snapshot of the whole book collection:
//!
//! - **Reads**: Check the snapshot first, on miss fetch from the repository
//! - **Writes**: Persist to the repository, then recompute the snapshot
//!
//! # Example
//!
//! ```ignore
//! use std::num::NonZeroUsize;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("bookquery.db").await?);
//! let cache = Arc::new(MemoryCache::new(NonZeroUsize::new(10_000).unwrap()));
//!
//! let catalog = CacheAsideCatalog::new(repo, cache, Duration::from_secs(300));
//! ```

mod catalog;

pub use catalog::CacheAsideCatalog;
