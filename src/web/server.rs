use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::catalog as catalog_handlers;
use super::api::metadata as metadata_handlers;
use super::api::revisit as revisit_handlers;
use super::api::root as root_handlers;
use super::api_doc::ApiDoc;
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handlers::welcome))
        // Scene lookup
        .route("/api/metadata", get(metadata_handlers::get_metadata))
        // Revisit prediction
        .route("/api/calculate", post(revisit_handlers::calculate))
        // Catalog management
        .route("/api/catalog", get(catalog_handlers::summary))
        .route("/api/catalog/reload", post(catalog_handlers::reload))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState) -> std::io::Result<()> {
    let bind_addr = state.config.web.bind.clone();
    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
