use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Book, BookFields, BookId, BookQuery, Result};

/// Reachability of the collaborators behind a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub store_ok: bool,
    pub cache_ok: bool,
}

impl HealthReport {
    /// The catalog can serve requests as long as the store answers.
    /// A failing cache only costs performance.
    pub fn is_ready(&self) -> bool {
        self.store_ok
    }
}

/// Read and write operations over the book catalog.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Returns every book.
    async fn list_all(&self) -> Result<Vec<Book>>;

    /// Returns the books satisfying every predicate of the query.
    async fn search(&self, query: &BookQuery) -> Result<Vec<Book>>;

    /// Inserts a new book and returns it with its assigned id.
    async fn create(&self, fields: BookFields) -> Result<Book>;

    /// Overwrites the mutable attributes of an existing book.
    async fn update(&self, id: BookId, fields: BookFields) -> Result<Book>;

    /// Removes a book.
    async fn delete(&self, id: BookId) -> Result<()>;

    /// Probes the store and the cache.
    async fn health(&self) -> HealthReport;
}
