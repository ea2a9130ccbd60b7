pub mod handlers;
pub mod models;
pub mod openapi;

use axum::{Router, routing::get};
use handlers::{SharedService, api_routes};
use openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Full application router: health check, `/api` routes and Swagger UI.
pub fn app(service: SharedService) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
