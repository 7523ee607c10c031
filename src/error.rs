// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Generic body for anything that is not a classified error.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something broke!";

/// Body message for requests that match no route.
pub const NOT_FOUND_MESSAGE: &str = "Content not found";

/// One field-level violation reported by the request validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every failure a handler or middleware can raise.
///
/// All variants except `Internal` carry a client-safe message and are sent
/// back verbatim. `Internal` is logged and answered with a fixed body.
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },

    // 400, uniqueness violations
    #[error("{0}")]
    Conflict(String),

    // 401 Unauthorized
    #[error("{0}")]
    Unauthorized(String),

    // 404, or 400 on routes that report a missing row as a bad request
    #[error("{message}")]
    NotFound { message: String, status: StatusCode },

    // 500 Internal Server Error
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the message is safe to show to the client.
    pub fn is_classified(&self) -> bool {
        !matches!(self, ApiError::Internal(_))
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation { message, violations } => json!({
                "error": message,
                "details": violations,
            }),
            ApiError::Internal(_) => json!({ "message": GENERIC_FAILURE_MESSAGE }),
            classified => json!({ "error": classified.to_string() }),
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation {
            message: "Validation failed".to_string(),
            violations,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    /// A missing row reported as 400, for routes that treat it as a bad request.
    pub fn missing(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(error: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal(error.into())
    }
}

impl From<crate::database::DatabaseError> for ApiError {
    fn from(err: crate::database::DatabaseError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.into())
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if !self.is_classified() {
            tracing::error!(error = ?self, "unhandled error while processing request");
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

/// Router fallback for requests that match no route.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": NOT_FOUND_MESSAGE })),
    )
}

/// Response for a panic caught by the router's panic layer.
pub fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": GENERIC_FAILURE_MESSAGE })),
    )
        .into_response()
}
