//! Buzz Connect Server - social account connection API
//!
//! This library provides the HTTP surface of the service: configuration
//! loading, the authentication initiation endpoint and its error mapping,
//! health checks and OpenAPI documentation.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use error::*;
pub use server::BuzzConnectServer;

use axum::{body::Body, http::Request, middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

/// Create the main application router with all routes and middleware
///
/// # Errors
///
/// Fails when the configured CORS origins are not valid header values.
pub fn create_app(server: BuzzConnectServer) -> error_common::Result<Router> {
    let cors = middleware::create_cors_layer(&server.settings.server.cors_origins)?;

    // Spans record the path only; the query string carries the caller's token.
    // Failed responses are already logged by `ApiError`.
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::debug_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_failure(DefaultOnFailure::new().level(Level::DEBUG));

    Ok(routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(cors)
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server))
}
