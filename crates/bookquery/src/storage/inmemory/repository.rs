//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookquery_core::catalog::{Book, BookFields, BookId, BookQuery};
use bookquery_core::storage::{BookRepository, RepositoryError, Result};

const ENTITY: &str = "Book";

#[derive(Debug)]
struct Table {
    books: BTreeMap<BookId, Book>,
    /// Next id to hand out. Ids are never reused, even after a delete.
    next_id: BookId,
}

/// In-memory storage backend.
///
/// Books are kept ordered by id, so listings come out in the same order as
/// the SQLite backend's `ORDER BY id`. Data is not persisted.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                books: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn list_books(&self) -> Result<Vec<Book>> {
        let table = self.table.read().await;
        Ok(table.books.values().cloned().collect())
    }

    async fn query_books(&self, query: &BookQuery) -> Result<Vec<Book>> {
        let table = self.table.read().await;
        Ok(table
            .books
            .values()
            .filter(|book| query.matches(book))
            .cloned()
            .collect())
    }

    async fn get_book(&self, id: BookId) -> Result<Option<Book>> {
        let table = self.table.read().await;
        Ok(table.books.get(&id).cloned())
    }

    async fn create_book(&self, fields: &BookFields) -> Result<Book> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let book = Book::from_fields(id, fields.clone());
        table.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update_book(&self, original: &Book, updated: &Book) -> Result<()> {
        if original.id != updated.id {
            return Err(RepositoryError::InvalidData(format!(
                "cannot change book id from {} to {}",
                original.id, updated.id
            )));
        }

        let mut table = self.table.write().await;
        match table.books.get_mut(&original.id) {
            Some(current) if current == original => {
                *current = updated.clone();
                Ok(())
            }
            _ => Err(RepositoryError::Conflict {
                entity_type: ENTITY,
                id: original.id,
            }),
        }
    }

    async fn delete_book(&self, id: BookId) -> Result<()> {
        let mut table = self.table.write().await;
        if table.books.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: ENTITY,
                id,
            });
        }
        Ok(())
    }
}
