//! HTTP client for the three upstream APIs.
//!
//! Each public method issues exactly one GET, reads the whole body and
//! decodes it into a typed record. Nothing is retried here; a call either
//! yields a complete record or an [`UpstreamError`] naming the upstream.
//!
//! | Upstream | Method | Path |
//! |----------|--------|------|
//! | Hacker News top stories | [`UpstreamClient::top_stories`] | `/v0/topstories.json` |
//! | Hacker News item | [`UpstreamClient::story`] | `/v0/item/{id}.json` |
//! | AccuWeather hourly | [`UpstreamClient::hourly_forecast`] | `/forecasts/v1/hourly/12hour/{location}` |
//! | Dublin Bus RTPI | [`UpstreamClient::stop_arrivals`] | `/cgi-bin/rtpi/realtimebusinformation` |

use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ApiKey;
use crate::error::UpstreamError;
use crate::models::{HourlyForecast, StopStatus, Story};
use crate::utils::body_preview;

pub const DEFAULT_NEWS_BASE_URL: &str = "https://hacker-news.firebaseio.com";
pub const DEFAULT_WEATHER_BASE_URL: &str = "http://dataservice.accuweather.com";
pub const DEFAULT_BUS_BASE_URL: &str = "https://data.smartdublin.ie";

const LOG_PREVIEW_BYTES: usize = 300;

/// Which upstream a request targets. Carried by every [`UpstreamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamKind {
    TopStories,
    NewsItem,
    WeatherForecast,
    BusStopArrivals,
}

impl fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UpstreamKind::TopStories => "top stories",
            UpstreamKind::NewsItem => "news item",
            UpstreamKind::WeatherForecast => "weather forecast",
            UpstreamKind::BusStopArrivals => "bus stop arrivals",
        })
    }
}

/// Base URLs of the upstreams. Overridable so tests can point at stubs.
///
/// Each base path always ends in `/`, so request paths are appended to any
/// prefix the base carries (`http://proxy/hn` + `v0/topstories.json`).
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub news: Url,
    pub weather: Url,
    pub bus: Url,
}

impl Endpoints {
    pub fn parse(news: &str, weather: &str, bus: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            news: base_url(news)?,
            weather: base_url(weather)?,
            bus: base_url(bus)?,
        })
    }
}

fn base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Cheaply clonable handle shared by every handler.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoints: Arc<Endpoints>,
}

impl UpstreamClient {
    /// `timeout` bounds each call end to end, connect through body read.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoints: Arc::new(endpoints),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Ids of the current Hacker News front page, best first.
    pub async fn top_stories(&self) -> Result<Vec<u64>, UpstreamError> {
        let kind = UpstreamKind::TopStories;
        let url = join(kind, &self.endpoints.news, "v0/topstories.json")?;
        self.fetch(kind, url).await
    }

    pub async fn story(&self, id: u64) -> Result<Story, UpstreamError> {
        let kind = UpstreamKind::NewsItem;
        let mut url = join(kind, &self.endpoints.news, &format!("v0/item/{id}.json"))?;
        url.query_pairs_mut().append_pair("print", "pretty");
        self.fetch(kind, url).await
    }

    /// Next 12 hours for `location`, metric units with details.
    pub async fn hourly_forecast(
        &self,
        location: u32,
        key: &ApiKey,
    ) -> Result<Vec<HourlyForecast>, UpstreamError> {
        let kind = UpstreamKind::WeatherForecast;
        let mut url = join(
            kind,
            &self.endpoints.weather,
            &format!("forecasts/v1/hourly/12hour/{location}"),
        )?;
        url.query_pairs_mut()
            .append_pair("apikey", key.expose())
            .append_pair("metric", "true")
            .append_pair("details", "true");
        self.fetch(kind, url).await
    }

    pub async fn stop_arrivals(&self, stop: u32) -> Result<StopStatus, UpstreamError> {
        let kind = UpstreamKind::BusStopArrivals;
        let mut url = join(
            kind,
            &self.endpoints.bus,
            "cgi-bin/rtpi/realtimebusinformation",
        )?;
        url.query_pairs_mut()
            .append_pair("stopid", &stop.to_string());
        self.fetch(kind, url).await
    }

    /// Only the path is recorded on the span; the query may hold the API key.
    #[instrument(level = "debug", skip_all, fields(upstream = %kind, path = %url.path()))]
    async fn fetch<T: DeserializeOwned>(&self, kind: UpstreamKind, url: Url) -> Result<T, UpstreamError> {
        let t0 = Instant::now();

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(kind, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, elapsed_ms = t0.elapsed().as_millis() as u64, "Upstream returned non-success status");
            return Err(UpstreamError::Status { kind, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| network_error(kind, e))?;

        let record = serde_json::from_slice::<T>(&body).map_err(|source| {
            warn!(
                error = %source,
                body_preview = %body_preview(&body, LOG_PREVIEW_BYTES),
                "Upstream body did not decode"
            );
            UpstreamError::Decode { kind, source }
        })?;

        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Upstream call succeeded"
        );
        Ok(record)
    }
}

/// `path` is relative; it lands under the base's own path.
fn join(kind: UpstreamKind, base: &Url, path: &str) -> Result<Url, UpstreamError> {
    base.join(path)
        .map_err(|source| UpstreamError::Url { kind, source })
}

fn network_error(kind: UpstreamKind, source: reqwest::Error) -> UpstreamError {
    // reqwest embeds the full URL, query string included, in its Display.
    warn!(upstream = %kind, timeout = source.is_timeout(), "Upstream transport failure");
    UpstreamError::Network {
        kind,
        source: source.without_url(),
    }
}
