//! HTTP API application wiring (Axum router + service wiring).
//!
//! The folder is structured like:
//! - `services.rs`: shared state (the active snapshot and how to refresh it)
//! - `routes/`: HTTP routes + handlers (one file per surface area)
//! - `dto.rs`: response DTOs for the admin surface
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
