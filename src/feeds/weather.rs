//! AccuWeather 12-hour hourly forecast for the configured location.

use axum::Json;
use axum::extract::State;
use tracing::{info, instrument};

use crate::config::ApiKey;
use crate::error::{Feed, FeedError, UpstreamError};
use crate::models::HourlyForecast;
use crate::server::AppState;
use crate::upstream::UpstreamClient;

#[instrument(level = "info", skip(upstream, key))]
pub async fn forecast(
    upstream: &UpstreamClient,
    location: u32,
    key: &ApiKey,
) -> Result<Vec<HourlyForecast>, UpstreamError> {
    let hours = upstream.hourly_forecast(location, key).await?;
    info!(hours = hours.len(), "Fetched hourly forecast");
    Ok(hours)
}

/// `GET /weather`
pub async fn get_weather(
    State(state): State<AppState>,
) -> Result<Json<Vec<HourlyForecast>>, FeedError> {
    forecast(&state.upstream, state.config.weather_location, &state.weather_key)
        .await
        .map(Json)
        .map_err(|e| FeedError::new(Feed::Weather, e))
}
