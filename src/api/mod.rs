//! HTTP API module for the health and builder endpoints.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
