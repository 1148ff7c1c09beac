use clap::Parser;
use dash_feeds::cli::Cli;
use dash_feeds::config::{ApiKey, DashboardConfig};
use dash_feeds::server::{self, AppState};
use dash_feeds::upstream::{Endpoints, UpstreamClient};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "dash_feeds starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Config & key: both fatal if missing ----
    let config = DashboardConfig::load(&args.config).await.inspect_err(|e| {
        error!(error = %e, "Could not load dashboard configuration");
    })?;
    let weather_key = ApiKey::load(&args.weather_key_file).await.inspect_err(|e| {
        error!(error = %e, "Could not load weather API key");
    })?;

    // ---- Upstream client ----
    let endpoints = Endpoints::parse(&args.news_base_url, &args.weather_base_url, &args.bus_base_url)
        .inspect_err(|e| error!(error = %e, "Invalid upstream base URL"))?;
    let upstream = UpstreamClient::new(endpoints, Duration::from_secs(args.request_timeout_secs))?;
    info!(
        news = %upstream.endpoints().news,
        weather = %upstream.endpoints().weather,
        bus = %upstream.endpoints().bus,
        timeout_secs = args.request_timeout_secs,
        "Upstream client ready"
    );

    let state = AppState::new(config, weather_key, upstream);
    server::run(state, &args.static_dir, args.listen).await?;

    info!("dash_feeds stopped");
    Ok(())
}
