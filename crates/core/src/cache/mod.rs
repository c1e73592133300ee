mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{BOOK_LIST_KEY, HEALTH_PROBE_KEY};
pub use serialization::{deserialize_books, serialize_books, SerializationError};
pub use traits::Cache;
