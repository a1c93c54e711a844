use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::routes::paths;
use crate::server::BuzzConnectServer;

/// OpenAPI documentation for the public endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::twitter::twitter_auth,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::services::AuthUrlData,
            crate::error::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "authentication", description = "Social account authentication initiation"),
    ),
    info(
        title = "Buzz Connect API",
        version = "0.1.0",
        description = "Starts OAuth authentication flows for connecting social accounts.",
        license(name = "MIT"),
    ),
)]
pub struct ApiDoc;

/// Swagger UI and the raw OpenAPI document
pub fn create_docs_routes() -> Router<BuzzConnectServer> {
    Router::new().merge(SwaggerUi::new(paths::docs::SWAGGER_UI).url(paths::docs::OPENAPI_JSON, ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/auth"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
