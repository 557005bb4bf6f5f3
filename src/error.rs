//! Common error types for albumd

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Common result type for albumd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced by the store and the HTTP handlers
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed request body or parameter
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Failures communicate solely via the status code; the detail goes to the
/// log, never into the response body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Database(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            error!("request failed: {}", self);
        }

        status.into_response()
    }
}
