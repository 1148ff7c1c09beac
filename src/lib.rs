//! # dash_feeds
//!
//! Backend for a single-page dashboard. Three unrelated upstreams are
//! queried on demand and republished as JSON next to a static front end:
//!
//! - `/news`: the current Hacker News front page
//! - `/weather`: the AccuWeather 12-hour forecast for one location
//! - `/bus`: Dublin Bus real-time arrivals for a list of stops
//!
//! ## Architecture
//!
//! 1. **Upstream**: [`upstream::UpstreamClient`] performs one GET and decodes one record
//! 2. **Fan-out**: [`pool::FetchPool`] runs N fetches with W in flight, results in input order
//! 3. **Feeds**: [`feeds`] handlers turn configuration into work lists and JSON responses
//!
//! Nothing is cached or retried; every request hits the upstreams afresh and
//! fails as a whole if any of its calls fail.

pub mod cli;
pub mod config;
pub mod error;
pub mod feeds;
pub mod models;
pub mod pool;
pub mod server;
pub mod upstream;
pub mod utils;
