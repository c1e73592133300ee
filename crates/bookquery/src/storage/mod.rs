//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`BookRepository`]
//! defined in `bookquery_core::storage`, plus the cache-aside catalog that
//! fronts whichever backend is active. Backends are selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: in-process storage, nothing persisted
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p bookquery
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p bookquery --no-default-features --features inmemory,memory
//! ```
//!
//! [`BookRepository`]: bookquery_core::storage::BookRepository

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p bookquery --features sqlite"
);

pub mod cached;

// Always compiled: the catalog tests run against it under every feature set.
#[cfg_attr(not(feature = "inmemory"), allow(dead_code, unused_imports))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
