// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every handler returns `Result<_, ApiError>`; the conversion to a status
/// code + JSON body happens exactly once, in `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - payload failed schema validation; carries every
    // violated field, never just the first
    Validation(HashMap<String, String>),

    // 401 Unauthorized - missing/malformed/expired/bad-signature token
    Unauthorized(String),

    // 404 Not Found - referenced product id absent
    NotFound(String),

    // 500 Internal Server Error - store unavailable, signer misconfigured, etc.
    // The detail is logged server-side and never sent to the client.
    Internal(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation(field_errors) => json!({ "error": field_errors }),
            ApiError::Unauthorized(msg) => json!({ "error": msg }),
            ApiError::NotFound(msg) => json!({ "error": msg }),
            ApiError::Internal(_) => json!({ "error": "Internal Server Error" }),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(field_errors) => {
                write!(f, "validation failed on {} field(s)", field_errors.len())
            }
            ApiError::Unauthorized(msg) => write!(f, "unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::not_found("Product not found"),
            other => ApiError::internal(other.to_string()),
        }
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("request failed: {}", detail);
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
