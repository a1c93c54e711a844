//! Route path constants
//!
//! utoipa `#[path(...)]` attributes need string literals, so the handler
//! annotations repeat these values and must be kept in sync.

/// Health check endpoints
pub mod health {
    pub const HEALTH: &str = "/health";
}

/// Authentication endpoints
pub mod auth {
    /// Twitter/X authentication initiation
    pub const TWITTER_AUTH: &str = "/auth";
}

/// API documentation
pub mod docs {
    pub const SWAGGER_UI: &str = "/docs";
    pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
}
