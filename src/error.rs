//! Error handling for the Crowd Density Mock Service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Zone or CCTV absent from the registry, or CCTV not a member of the stated zone
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed identifier (non-integer zone number or CCTV suffix)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::error!(
            status = %status,
            detail = %detail,
            "Request error"
        );

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}
