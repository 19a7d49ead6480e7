//! HTTP boundary errors with the flat `{ "error": ... }` JSON payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error body returned to the browser page
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Failures reported by `POST /api/analyze`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not JSON, or `content` is missing or not a string
    #[error("Invalid content")]
    InvalidContent,
    #[error("Content too large: {size} bytes exceeds limit of {limit}")]
    ContentTooLarge { size: usize, limit: usize },
    /// Anything that went wrong while the extractor was running
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidContent => StatusCode::BAD_REQUEST,
            ApiError::ContentTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::AnalysisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the caller; internal detail stays in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidContent => "Invalid content",
            ApiError::ContentTooLarge { .. } => "Content too large",
            ApiError::AnalysisFailed(_) => "Analysis failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::AnalysisFailed(detail) => {
                tracing::error!(detail = detail.as_str(), "Content analysis failed");
            }
            other => tracing::debug!(error = %other, "Rejected analyze request"),
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
