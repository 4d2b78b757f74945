pub mod forms;
pub mod source_records;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: form and source-record routes, health,
/// and the Swagger UI mounted at `/api`.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let form_routes = Router::new()
        .route("/form", get(forms::list).post(forms::create))
        .route("/form/source/:id", get(forms::source_records))
        .route("/form/:id", get(forms::get_one).delete(forms::delete));

    let source_routes = Router::new()
        .route("/source", get(source_records::list).post(source_records::create));

    Router::new()
        .route("/health", get(health))
        .merge(form_routes)
        .merge(source_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
