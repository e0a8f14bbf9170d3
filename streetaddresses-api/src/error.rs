//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fault raised by the repository collaborator
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required collaborator was not supplied at construction time
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Error::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_code(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ),
            Error::Repository(ref e) => {
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    entity_id = ?e.entity_id,
                    retriable = e.is_retriable(),
                    "Unhandled repository fault: {}", e.message
                );
                internal_error()
            }
            other => {
                tracing::error!("Unhandled error: {}", other);
                internal_error()
            }
        };

        (status, Json(error_response)).into_response()
    }
}

fn internal_error() -> (StatusCode, ErrorResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::with_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred",
        ),
    )
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryOperation;

    #[test]
    fn test_not_found_status() {
        let response = Error::NotFound("StreetAddress 3".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_fault_is_internal() {
        let err: Error =
            RepositoryError::connection_failed(RepositoryOperation::Find, "refused").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_collaborator_display() {
        let err = Error::MissingCollaborator("repository");
        assert_eq!(err.to_string(), "Missing collaborator: repository");
    }

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse::with_code(StatusCode::NOT_FOUND, "NOT_FOUND", "gone");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "gone");
    }
}
