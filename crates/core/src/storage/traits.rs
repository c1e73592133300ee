use async_trait::async_trait;

use crate::catalog::{Book, BookFields, BookId, BookQuery};

use super::Result;

/// Repository for book records. This is the source of truth.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Returns every book ordered by id.
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// Returns the books matching the query, ordered by id.
    async fn query_books(&self, query: &BookQuery) -> Result<Vec<Book>>;

    /// Gets a book by its id.
    async fn get_book(&self, id: BookId) -> Result<Option<Book>>;

    /// Inserts a new book. The repository assigns the id.
    async fn create_book(&self, fields: &BookFields) -> Result<Book>;

    /// Replaces `original` with `updated`.
    ///
    /// Fails with [`RepositoryError::Conflict`](super::RepositoryError::Conflict)
    /// when the stored row no longer equals `original`, including when it was
    /// removed in the meantime.
    async fn update_book(&self, original: &Book, updated: &Book) -> Result<()>;

    /// Deletes a book by its id.
    async fn delete_book(&self, id: BookId) -> Result<()>;

    /// Checks that the repository is reachable.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
