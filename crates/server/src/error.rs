//! Error boundary for the orders API.
//!
//! Every handler returns `Result<T, AppError>`; the `IntoResponse` impl is
//! the single place request failures become HTTP responses. All failures
//! other than not-found surface as 400 - the service contract makes no
//! distinction between client-caused and system-caused errors at the
//! boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::StoreError;

/// Application-level error type for the orders API.
#[derive(Debug, Error)]
pub enum AppError {
    /// The order payload failed validation; one message per field error.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// The requested order does not exist. Not a system failure.
    #[error("order not found")]
    NotFound,

    /// The store could not complete an operation.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The request body could not be read.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Store(err) = &self {
            tracing::error!(error = %err, "store failure during request");
        }

        match self {
            Self::Validation(messages) => {
                (StatusCode::BAD_REQUEST, Json(messages)).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Store(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            get_status(AppError::Validation(vec!["bad".to_string()])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(get_status(AppError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(AppError::Store(StoreError::Unavailable(
                "down".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::BadRequest("bad body".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_validation_body_is_json_array_of_messages() {
        let err = AppError::Validation(vec![
            "Customer name is required".to_string(),
            "Total must be a positive value".to_string(),
        ]);

        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Vec<String> = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            vec![
                "Customer name is required".to_string(),
                "Total must be a positive value".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_not_found_body_is_empty() {
        let response = AppError::NotFound.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_store_error_body_is_raw_message() {
        let err = AppError::Store(StoreError::Unavailable("connection refused".to_string()));

        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8_lossy(&bytes),
            "store unavailable: connection refused"
        );
    }
}
