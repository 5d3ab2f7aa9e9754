use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod categories;
pub mod clients;
pub mod orders;
pub mod priorities;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, entity CRUD and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/categories", get(categories::list).post(categories::create))
        .route(
            "/api/categories/:id",
            get(categories::get).put(categories::update).delete(categories::delete),
        )
        .route("/api/orders", get(orders::list).post(orders::create))
        .route("/api/orders/:id", get(orders::get).put(orders::update).delete(orders::delete))
        .route("/api/clients", get(clients::list).post(clients::create))
        .route("/api/clients/:id", get(clients::get).put(clients::update).delete(clients::delete))
        .route("/api/priorities", get(priorities::list).post(priorities::create))
        .route(
            "/api/priorities/:id",
            get(priorities::get).put(priorities::update).delete(priorities::delete),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency per response
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
