//! Dashboard configuration and the weather API key.
//!
//! Both are read once at startup and shared read-only with every handler.
//! Any failure here is fatal; the server never starts with a partial config.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::error::ConfigError;

/// Contents of `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// AccuWeather location key.
    pub weather_location: u32,
    /// How many top stories `/news` returns.
    pub stories_count: usize,
    /// Dublin Bus stop numbers, in display order.
    pub bus_stops: Vec<u32>,
}

impl DashboardConfig {
    pub fn from_json_bytes(bytes: &[u8], path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_slice(bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).await.map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_bytes(&bytes, path)?;
        info!(
            weather_location = config.weather_location,
            stories_count = config.stories_count,
            bus_stops = ?config.bus_stops,
            "Loaded dashboard configuration"
        );
        Ok(config)
    }
}

/// AccuWeather API key. `Debug` is redacted so the key never reaches the log.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey {
                path: path.to_path_buf(),
            });
        }
        Ok(Self(key.to_string()))
    }

    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let key = Self::new(&raw, path)?;
        info!("Loaded weather API key");
        Ok(key)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
