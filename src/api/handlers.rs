//! HTTP API handlers.

use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::builder::{normalize, validate, BuilderField};
use crate::error::ApiError;
use crate::metrics;

/// Fixed health-check message.
pub const HEALTH_MESSAGE: &str = "Server is up and running...";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Human-readable status line.
    pub message: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    metrics::inc_health_requests();
    Json(HealthResponse {
        message: HEALTH_MESSAGE,
    })
}

/// Builder handler - validates and normalizes a submitted field definition.
///
/// The body is taken as raw JSON so the validator controls which rule
/// reports first; a malformed body surfaces the parser's own message.
pub async fn build_field(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BuilderField>, ApiError> {
    metrics::inc_builder_requests();

    let Json(body) = body.map_err(|rejection| {
        metrics::inc_validation_failures();
        ApiError::from(rejection)
    })?;

    let field = validate(&body).map_err(|err| {
        metrics::inc_validation_failures();
        err
    })?;

    Ok(Json(normalize(field)))
}

/// Fallback handler - answers preflights, 404s everything else.
///
/// Bare `OPTIONS` requests (no preflight headers) never reach the CORS
/// layer's short-circuit, so the 200 is produced here.
pub async fn fallback(method: Method) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    metrics::inc_unmatched_routes();
    Err(ApiError::NotFound)
}
