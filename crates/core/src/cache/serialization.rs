//! Pure functions for serializing/deserializing the book snapshot to/from cache bytes.
//!
//! The snapshot is a JSON array of books, which keeps cached values readable
//! with `redis-cli GET bookList`.

use thiserror::Error;

use crate::catalog::Book;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of books to JSON bytes.
///
/// # Arguments
/// * `books` - The books to serialize, in snapshot order
///
/// # Returns
/// JSON-encoded bytes representing the books array
pub fn serialize_books(books: &[Book]) -> Result<Vec<u8>> {
    serde_json::to_vec(books).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of books.
///
/// # Arguments
/// * `bytes` - JSON-encoded bytes
///
/// # Returns
/// The deserialized books, in the order they were stored
pub fn deserialize_books(bytes: &[u8]) -> Result<Vec<Book>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
