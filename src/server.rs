//! axum server wiring.
//!
//! The router exposes:
//! - `/news`, `/weather`, `/bus`: the aggregated JSON feeds
//! - `/healthz`: liveness probe
//! - everything else: static files from the configured directory

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{ApiKey, DashboardConfig};
use crate::feeds;
use crate::upstream::UpstreamClient;

/// Read-only state shared by every handler invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub weather_key: Arc<ApiKey>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: DashboardConfig, weather_key: ApiKey, upstream: UpstreamClient) -> Self {
        Self {
            config: Arc::new(config),
            weather_key: Arc::new(weather_key),
            upstream,
        }
    }
}

pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/news", get(feeds::news::get_news))
        .route("/weather", get(feeds::weather::get_weather))
        .route("/bus", get(feeds::bus::get_buses))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(state: AppState, static_dir: &Path, listen: SocketAddr) -> std::io::Result<()> {
    let app = build_app(state, static_dir);
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!(addr = %listener.local_addr()?, static_dir = %static_dir.display(), "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
