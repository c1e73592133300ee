use thiserror::Error;

use crate::storage::RepositoryError;

use super::types::BookId;

/// Errors surfaced by catalog operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Book not found: {id}")]
    NotFound { id: BookId },
    #[error("Book {id} was modified concurrently")]
    Conflict { id: BookId },
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<RepositoryError> for CatalogError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => CatalogError::NotFound { id },
            RepositoryError::Conflict { id, .. } => CatalogError::Conflict { id },
            other => CatalogError::UpstreamUnavailable(other.to_string()),
        }
    }
}
