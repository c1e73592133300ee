//! SQLite repository implementation.
//!
//! Implements [`BookRepository`] from `bookquery_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use bookquery_core::catalog::{Book, BookFields, BookId, BookQuery};
use bookquery_core::storage::{BookRepository, RepositoryError, Result};

use super::conversions::{format_optional_date, row_to_book};
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Book";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to the `books` table. All statements run on the
/// single background thread owned by the `tokio_rusqlite` connection.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl BookRepository for SqliteRepository {
    async fn list_books(&self) -> Result<Vec<Book>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_BOOKS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_book).map_err(wrap_err)?;

                let mut books = Vec::new();
                for row_result in rows {
                    books.push(row_result.map_err(wrap_err)?);
                }
                Ok(books)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn query_books(&self, query: &BookQuery) -> Result<Vec<Book>> {
        let (sql, params) = schema::select_books_matching(query);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params.iter()), row_to_book)
                    .map_err(wrap_err)?;

                let mut books = Vec::new();
                for row_result in rows {
                    books.push(row_result.map_err(wrap_err)?);
                }
                Ok(books)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_book(&self, id: BookId) -> Result<Option<Book>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BOOK_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_book) {
                    Ok(book) => Ok(Some(book)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_book(&self, fields: &BookFields) -> Result<Book> {
        let title = fields.title.clone();
        let author = fields.author.clone();
        let publication_date = format_optional_date(fields.publication_date.as_ref());
        let summary = fields.summary.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_BOOK,
                    rusqlite::params![title, author, publication_date, summary],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(Book::from_fields(id, fields.clone()))
    }

    async fn update_book(&self, original: &Book, updated: &Book) -> Result<()> {
        if original.id != updated.id {
            return Err(RepositoryError::InvalidData(format!(
                "cannot change book id from {} to {}",
                original.id, updated.id
            )));
        }

        let id = original.id;
        let new_title = updated.title.clone();
        let new_author = updated.author.clone();
        let new_date = format_optional_date(updated.publication_date.as_ref());
        let new_summary = updated.summary.clone();
        let old_title = original.title.clone();
        let old_author = original.author.clone();
        let old_date = format_optional_date(original.publication_date.as_ref());
        let old_summary = original.summary.clone();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_BOOK_IF_UNCHANGED,
                    rusqlite::params![
                        id,
                        new_title,
                        new_author,
                        new_date,
                        new_summary,
                        old_title,
                        old_author,
                        old_date,
                        old_summary
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        if rows == 0 {
            return Err(RepositoryError::Conflict {
                entity_type: ENTITY,
                id,
            });
        }

        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> Result<()> {
        let rows = self
            .conn
            .call(move |conn| conn.execute(schema::DELETE_BOOK, [id]).map_err(wrap_err))
            .await
            .map_err(map_tokio_rusqlite_error)?;

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: ENTITY,
                id,
            });
        }

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)
            })
            .await
            .map(|_| ())
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}
