//! Unified error types for the builder API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Fixed message for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "::: Error! Could not find this route!";

/// Fallback message for internal failures that carry no detail.
pub const UNKNOWN_ERROR_MESSAGE: &str = "::: Error! An unknown error ocurred!";

/// Unified error type for the builder API.
///
/// Every variant translates to exactly one JSON response of shape
/// `{"message": string}` with the matching status code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matched the request.
    #[error("{NOT_FOUND_MESSAGE}")]
    NotFound,

    /// The submitted body violated the field contract.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Catch-all for unexpected failures.
    #[error("{0}")]
    Internal(String),
}

/// A single violated rule of the builder field contract.
///
/// Carries the offending field path and the first violated rule's message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// JSON path of the offending field.
    pub field: &'static str,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for the given field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl ApiError {
    /// HTTP status code this error translates to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::new("body", rejection.body_text()))
    }
}

/// Uniform JSON error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error description.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(err) => {
                warn!(field = err.field, "request rejected: {err}");
            }
            ApiError::NotFound => {}
            ApiError::Internal(message) => {
                error!("internal error: {message}");
            }
        }

        let body = ErrorBody {
            message: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
