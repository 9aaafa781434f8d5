//! Error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use wealth_dashboard_core::errors::CoreError;

/// Result type of every query handler.
pub type ApiResult<T> = Result<T, ApiError>;

/// A query that failed inside the analytics layer.
///
/// Always rendered as HTTP 500 with a fixed, per-endpoint `message` and the
/// underlying error text in `error`.
#[derive(Debug, Error)]
#[error("{message}: {source}")]
pub struct ApiError {
    message: &'static str,
    #[source]
    source: CoreError,
}

impl ApiError {
    pub fn new(message: &'static str, source: CoreError) -> Self {
        Self { message, source }
    }

    /// Wraps a [`CoreError`] with `message`, for use with `map_err`.
    pub fn with_message(message: &'static str) -> impl FnOnce(CoreError) -> Self {
        move |source| Self::new(message, source)
    }

    pub fn message(&self) -> &str {
        self.message
    }
}

/// JSON body of a failed query.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(message = self.message, error = %self.source, "query failed");
        let body = ErrorResponse {
            message: self.message.to_string(),
            error: self.source.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
