//! Error handling module
//!
//! Centralized error types and HTTP response conversion. Errors are returned
//! to the form client as a status code and a plain-text message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::DomainError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Customer not found!")]
    CustomerNotFound(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Domain(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Domain(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            // Lookups miss the same way whether addressed by id or position
            AppError::CustomerNotFound(_)
            | AppError::Domain(DomainError::CustomerNotFound(_)) => {
                "Customer not found!".to_string()
            }
            other => other.to_string(),
        };

        tracing::debug!(status = %status, error = %self, "Request rejected");

        (status, message).into_response()
    }
}
