//! Command-line interface definitions for the dashboard server.
//!
//! Every option can also be supplied through the environment variable named
//! next to it, which is how the container deployment configures it.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::upstream::{DEFAULT_BUS_BASE_URL, DEFAULT_NEWS_BASE_URL, DEFAULT_WEATHER_BASE_URL};

/// Serve Hacker News, AccuWeather and Dublin Bus data as JSON next to a static dashboard.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./config.json, ./accuweather-key.txt, ./pages on :8080
/// dash_feeds
///
/// # Elsewhere
/// dash_feeds --config /etc/dash/config.json --static-dir /srv/dash --listen 127.0.0.1:3000
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Dashboard config (weatherLocation, storiesCount, busStops)
    #[arg(short, long, env = "DASH_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// File holding the AccuWeather API key
    #[arg(short = 'k', long, env = "DASH_WEATHER_KEY_FILE", default_value = "accuweather-key.txt")]
    pub weather_key_file: PathBuf,

    /// Directory served at `/`
    #[arg(short, long, env = "DASH_STATIC_DIR", default_value = "pages")]
    pub static_dir: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "DASH_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Per-call timeout for upstream requests, in seconds
    #[arg(
        long,
        env = "DASH_REQUEST_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_secs: u64,

    #[arg(long, env = "DASH_NEWS_BASE_URL", default_value = DEFAULT_NEWS_BASE_URL)]
    pub news_base_url: String,

    #[arg(long, env = "DASH_WEATHER_BASE_URL", default_value = DEFAULT_WEATHER_BASE_URL)]
    pub weather_base_url: String,

    #[arg(long, env = "DASH_BUS_BASE_URL", default_value = DEFAULT_BUS_BASE_URL)]
    pub bus_base_url: String,
}
