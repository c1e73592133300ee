/// Cache key holding the snapshot of the whole book collection.
///
/// Only the catalog writes this key, and it always stores the result of a
/// full scan.
pub const BOOK_LIST_KEY: &str = "bookList";

/// Key read by the default [`Cache::ping`](super::Cache::ping). Never written.
pub const HEALTH_PROBE_KEY: &str = "bookquery:health";
