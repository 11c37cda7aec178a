//! Form-builder field validation and normalization service.
//!
//! A small HTTP API that accepts a form-field definition (choices, default
//! value, display order, label, flags), validates it against a fixed
//! contract, normalizes it (trim, cap at 40 characters, dedupe) and echoes
//! it back. There is no persistence and no state shared between requests.
//!
//! # Endpoints
//!
//! ```text
//! GET  /api/health    liveness probe, fixed message
//! POST /api/builder   validate + normalize a field definition
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types and HTTP translation
//! - [`builder`]: Field contract, validation and normalization
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Request counters

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod metrics;

pub use builder::{BuilderField, DisplayOrder};
pub use config::Config;
pub use error::{ApiError, Result};
