use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use common::types::Health;
use service::items::ItemService;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::observability;
use crate::openapi::ApiDoc;

pub mod items;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Router state; the service is built once at startup and shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
}

impl AppState {
    pub fn new(items: Arc<ItemService>) -> Self {
        Self { items }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router: item API, health/metrics, optional Swagger UI.
pub fn build_router(state: AppState, cors: CorsLayer, docs_enabled: bool) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics));

    let api = Router::new()
        .route(items::ITEMS_PATH, get(items::list).post(items::create))
        .route(
            "/api/items/:id",
            get(items::get).put(items::update).delete(items::delete),
        );

    let mut router = public.merge(api).with_state(state);
    if docs_enabled {
        router = router.merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(
                        DefaultMakeSpan::new()
                            .level(Level::INFO)
                            .include_headers(false),
                    )
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    // status code and latency
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .include_headers(false),
                    )
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(cors),
    )
}
