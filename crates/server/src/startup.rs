use std::{future::Future, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, CorsConfig, LogFormat};
use service::items::{InMemoryItemRepository, ItemService};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

use crate::routes::{self, AppState};

/// Initialize logging via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

/// Permissive when no origins are configured, otherwise an explicit allow-list
/// for the item API's verbs.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    if cfg.is_permissive() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin `{o}`")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]))
}

/// Fresh empty store wrapped in the item service.
pub fn build_state() -> AppState {
    let repo = Arc::new(InMemoryItemRepository::new());
    AppState::new(Arc::new(ItemService::new(repo)))
}

/// Assemble the application from configuration.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(build_state(), cors, cfg.docs.enabled))
}

fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let addr = cfg.server.bind_addr();
    addr.parse()
        .with_context(|| format!("invalid bind address `{addr}`"))
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server until the process is killed.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_with_shutdown(cfg, std::future::pending()).await
}

/// Like [`run`], but stops accepting connections once `shutdown` resolves and
/// returns after in-flight requests finish.
pub async fn run_with_shutdown<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg)?;
    let addr = load_bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(%addr, docs = cfg.docs.enabled, "item store listening");
    serve(listener, app, shutdown).await
}
