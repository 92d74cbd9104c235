//! Error types for the pipeline HTTP server.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors that can occur while configuring or running the server.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is not usable.
    #[error("Invalid {field}: '{value}'. {reason}")]
    InvalidConfig {
        /// The configuration field.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The configuration file could not be read or parsed.
    #[error("Failed to load config from {path}: {reason}")]
    ConfigLoad {
        /// The path of the configuration file.
        path: String,
        /// Description of the failure.
        reason: String,
    },

    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A client error returned from an HTTP handler.
///
/// Rendered as `{"detail": "..."}` with the given status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Human-readable reason.
    pub detail: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}
