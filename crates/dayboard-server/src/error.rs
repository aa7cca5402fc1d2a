//! Error types for the dayboard server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use dayboard_core::TracingError;
use dayboard_providers::ProviderError;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing initialization error
    #[error("Tracing error: {0}")]
    Tracing(#[from] TracingError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl ServerError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// JSON body returned for failed API requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Provider failure rendered as an HTTP response.
///
/// The full display form (provider tag and error code included) goes to the
/// log; the response body carries only the bare message so the dashboard can
/// show it to the user as-is.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] ProviderError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self.0);

        let body = Json(ErrorResponse {
            error: self.0.message().to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ServerError::config("missing token directory");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing token directory"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = ServerError::from(io);
        assert!(matches!(err, ServerError::Io(_)));
    }

    #[tokio::test]
    async fn api_error_renders_500_with_bare_message() {
        let err = ApiError::from(
            ProviderError::configuration("credentials file is missing").with_provider("google"),
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "credentials file is missing");
    }
}
