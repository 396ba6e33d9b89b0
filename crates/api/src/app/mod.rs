//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog + application service wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around the given services.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}

/// Router backed by a fresh in-memory catalog (dev default, used by `main.rs`).
pub fn build_default_app() -> Router {
    build_app(Arc::new(services::AppServices::in_memory()))
}
