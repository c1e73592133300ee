use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bookquery_core::catalog::{catalog_error_to_status_code, CatalogError};

/// Handler error wrapping `anyhow::Error`.
///
/// Catalog errors keep their HTTP meaning; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(catalog_error) = self.0.downcast_ref::<CatalogError>() {
            let code = catalog_error_to_status_code(catalog_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
