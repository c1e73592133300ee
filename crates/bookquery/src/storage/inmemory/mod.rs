//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`BookRepository`]
//! that keeps every book in a `BTreeMap` behind a `tokio::sync::RwLock`.
//! It backs the `inmemory` feature and the catalog tests.
//!
//! [`BookRepository`]: bookquery_core::storage::BookRepository

mod repository;

pub use repository::InMemoryRepository;
