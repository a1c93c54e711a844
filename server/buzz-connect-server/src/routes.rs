pub mod paths;

use axum::{routing::get, Router};

use crate::{
    error::ApiError,
    handlers::{health, twitter},
    openapi,
    server::BuzzConnectServer,
};

/// Create health check routes
pub fn health_routes() -> Router<BuzzConnectServer> {
    Router::new().route(paths::health::HEALTH, get(health::health_check))
}

/// Create authentication routes
pub fn auth_routes() -> Router<BuzzConnectServer> {
    Router::new().route(paths::auth::TWITTER_AUTH, get(twitter::twitter_auth))
}

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::not_found("route")
}

/// Create all application routes
pub fn create_routes() -> Router<BuzzConnectServer> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(openapi::create_docs_routes())
        .fallback(not_found)
}
