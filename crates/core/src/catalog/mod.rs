mod error;
mod http_mapping;
mod query;
mod traits;
mod types;

pub use error::{CatalogError, Result};
pub use http_mapping::catalog_error_to_status_code;
pub use query::{filter_books, BookQuery};
pub use traits::{BookCatalog, HealthReport};
pub use types::{Book, BookFields, BookId};
