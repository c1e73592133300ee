//! Cache-aside book catalog.
//!
//! Wraps a [`BookRepository`] with a single cached snapshot of the whole
//! collection, stored under [`BOOK_LIST_KEY`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use bookquery_core::cache::{deserialize_books, serialize_books, Cache, BOOK_LIST_KEY};
use bookquery_core::catalog::{
    filter_books, Book, BookCatalog, BookFields, BookId, BookQuery, CatalogError, HealthReport,
    Result,
};
use bookquery_core::storage::{BookRepository, RepositoryError};

/// Book catalog fronted by a cached snapshot of the full collection.
///
/// - **Reads**: Serve from the snapshot when present; on a miss, `list_all`
///   reads the store and repopulates the snapshot, while a constrained
///   `search` pushes its predicates down to the store and leaves the
///   snapshot alone.
/// - **Writes**: Persist to the store, then recompute and overwrite the
///   snapshot.
///
/// The snapshot only ever holds the result of a full scan, so filtering it in
/// memory answers any search.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CacheAsideCatalog<R, C>
where
    R: BookRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CacheAsideCatalog<R, C>
where
    R: BookRepository,
    C: Cache,
{
    /// Creates a new cache-aside catalog.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository, the source of truth
    /// * `cache` - The cache holding the snapshot
    /// * `ttl` - Time-to-live applied on every snapshot write
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// Reads the snapshot. Cache errors and undecodable values count as a miss.
    async fn cached_snapshot(&self) -> Option<Vec<Book>> {
        match self.cache.get(BOOK_LIST_KEY).await {
            Ok(Some(bytes)) => match deserialize_books(&bytes) {
                Ok(books) => {
                    tracing::trace!(count = books.len(), "Cache hit for book list");
                    Some(books)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Cache book list deserialization failed");
                    None
                }
            },
            Ok(None) => {
                tracing::trace!("Cache miss for book list");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cache read failed, falling back to store");
                None
            }
        }
    }

    /// Writes the snapshot with a fresh TTL. Returns false if it was not stored.
    async fn store_snapshot(&self, books: &[Book]) -> bool {
        let bytes = match serialize_books(books) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize book list");
                return false;
            }
        };

        match self.cache.set(BOOK_LIST_KEY, &bytes, Some(self.ttl)).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to cache book list");
                false
            }
        }
    }

    /// Recomputes the snapshot after a store write.
    ///
    /// The write has already happened, so failures here never fail the
    /// caller. If a fresh snapshot cannot be stored the old one is dropped.
    async fn refresh_snapshot(&self) {
        let stored = match self.repository.list_books().await {
            Ok(books) => self.store_snapshot(&books).await,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to reload book list after write");
                false
            }
        };

        if !stored {
            if let Err(err) = self.cache.delete(BOOK_LIST_KEY).await {
                tracing::warn!(error = %err, "Failed to invalidate book list cache");
            }
        }
    }
}

#[async_trait]
impl<R, C> BookCatalog for CacheAsideCatalog<R, C>
where
    R: BookRepository + 'static,
    C: Cache + 'static,
{
    async fn list_all(&self) -> Result<Vec<Book>> {
        if let Some(books) = self.cached_snapshot().await {
            return Ok(books);
        }

        let books = self.repository.list_books().await?;
        self.store_snapshot(&books).await;

        tracing::debug!(count = books.len(), "Book list loaded from store");
        Ok(books)
    }

    async fn search(&self, query: &BookQuery) -> Result<Vec<Book>> {
        // The unconstrained search is a full scan and may repopulate the snapshot.
        if query.is_empty() {
            return self.list_all().await;
        }

        if let Some(books) = self.cached_snapshot().await {
            return Ok(filter_books(books, query));
        }

        let books = self.repository.query_books(query).await?;

        tracing::debug!(count = books.len(), "Search answered by store");
        Ok(books)
    }

    async fn create(&self, fields: BookFields) -> Result<Book> {
        let book = self.repository.create_book(&fields).await?;

        self.refresh_snapshot().await;

        tracing::debug!(book_id = book.id, "Book created");
        Ok(book)
    }

    async fn update(&self, id: BookId, fields: BookFields) -> Result<Book> {
        let Some(original) = self.repository.get_book(id).await? else {
            return Err(CatalogError::NotFound { id });
        };

        let mut updated = original.clone();
        updated.apply(fields);

        match self.repository.update_book(&original, &updated).await {
            Ok(()) => {}
            Err(RepositoryError::Conflict { .. }) => {
                // Tell a concurrent delete apart from a concurrent edit.
                let err = match self.repository.get_book(id).await? {
                    Some(_) => CatalogError::Conflict { id },
                    None => CatalogError::NotFound { id },
                };
                tracing::debug!(book_id = id, error = %err, "Book update lost a race");
                return Err(err);
            }
            Err(err) => return Err(err.into()),
        }

        self.refresh_snapshot().await;

        tracing::debug!(book_id = id, "Book updated");
        Ok(updated)
    }

    async fn delete(&self, id: BookId) -> Result<()> {
        if self.repository.get_book(id).await?.is_none() {
            return Err(CatalogError::NotFound { id });
        }

        self.repository.delete_book(id).await?;

        self.refresh_snapshot().await;

        tracing::debug!(book_id = id, "Book deleted");
        Ok(())
    }

    async fn health(&self) -> HealthReport {
        let (store, cache) = tokio::join!(self.repository.ping(), self.cache.ping());

        if let Err(err) = &store {
            tracing::warn!(error = %err, "Store health check failed");
        }
        if let Err(err) = &cache {
            tracing::warn!(error = %err, "Cache health check failed");
        }

        HealthReport {
            store_ok: store.is_ok(),
            cache_ok: cache.is_ok(),
        }
    }
}
