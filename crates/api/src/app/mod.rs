//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store and template wiring
//! - `routes/`: HTTP routes + handlers (one file per page)
//! - `errors.rs`: consistent HTML error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_tracing))
                .layer(Extension(services)),
        )
}
