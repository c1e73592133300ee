//! Pure functions for mapping catalog errors to HTTP status codes.

use super::CatalogError;

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Conflict` -> 409 (Conflict)
/// - `UpstreamUnavailable` -> 503 (Service Unavailable)
///
/// # Examples
///
/// ```
/// use bookquery_core::catalog::{catalog_error_to_status_code, CatalogError};
///
/// let error = CatalogError::NotFound { id: 1 };
/// assert_eq!(catalog_error_to_status_code(&error), 404);
/// ```
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::NotFound { .. } => 404,
        CatalogError::Conflict { .. } => 409,
        CatalogError::UpstreamUnavailable(_) => 503,
    }
}
