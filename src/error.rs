//! Application error type and its HTTP rendering.
//!
//! Every failure is rendered as
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": { ... } } }
//! ```
//!
//! For validation errors `details` maps each offending field to a list of
//! messages.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

const INVALID_DATA: &str = "The given data was invalid.";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    RateLimited { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Validation failure on a single field.
    pub fn invalid_field(field: &str, message: &str) -> Self {
        Self::bad_request(INVALID_DATA, json!({ field: [message] }))
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Client exceeded its request quota; retry after `wait_secs`.
    pub fn rate_limited(wait_secs: u64) -> Self {
        Self::RateLimited {
            message: "Too many requests".to_string(),
            details: json!({ "retry_after": wait_secs }),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::RateLimited { message, details } => ("rate_limited", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .map(Value::String)
                .collect();

            details.insert(field.to_string(), Value::Array(messages));
        }

        AppError::bad_request(INVALID_DATA, Value::Object(details))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if let JsonRejection::JsonDataError(err) = &rejection
            && let Some((field, message)) = field_error(err)
        {
            return AppError::invalid_field(&field, &message);
        }

        AppError::bad_request(INVALID_DATA, json!({ "body": [rejection.body_text()] }))
    }
}

/// Field path and message of a JSON body that parsed but had the wrong shape.
///
/// Returns `None` when the failure is not tied to a field, e.g. a top-level
/// array where an object was expected.
fn field_error(err: &(dyn std::error::Error + 'static)) -> Option<(String, String)> {
    let mut source = err.source();

    while let Some(e) = source {
        if let Some(e) = e.downcast_ref::<serde_path_to_error::Error<serde_json::Error>>() {
            let path = e.path().to_string();
            if path == "." {
                return None;
            }
            return Some((path, e.inner().to_string()));
        }
        source = e.source();
    }

    None
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                AppError::not_found("Resource not found", json!({ "path": [err.body_text()] }))
            }
            other => {
                tracing::error!(error = %other, "Path extraction failed");
                AppError::internal("Internal server error", json!({}))
            }
        }
    }
}
