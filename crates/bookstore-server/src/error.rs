//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use bookstore_core::ModelError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Forbidden (403) — missing or invalid authentication.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Upstream object-storage failure (502).
    #[error("upstream storage error: {0}")]
    Storage(#[from] bookstore_store::StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Storage(_) => "UPSTREAM_STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Storage failures are the backend's, not the caller's.
            Self::Storage(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "BAD_REQUEST", "UPSTREAM_STORAGE_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_store::StoreError;

    #[test]
    fn storage_errors_map_to_bad_gateway() {
        let err: ApiError = StoreError::PutObject("connection refused".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "UPSTREAM_STORAGE_ERROR");
    }

    #[test]
    fn model_errors_map_to_bad_request() {
        let err: ApiError = ModelError::Empty.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("empty model"));
    }

    #[test]
    fn error_response_shape() {
        let err = ApiError::BadRequest("missing publish path".to_string());
        let body = ErrorResponse {
            error: ErrorDetails {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("BAD_REQUEST"));
        assert!(json.contains("missing publish path"));
    }
}
