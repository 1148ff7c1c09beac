//! Error types shared across the crate.
//!
//! - [`ConfigError`]: startup failures while reading the config or API-key file
//! - [`UpstreamError`]: a single upstream call failed (transport, status, or decode)
//! - [`FeedError`]: a handler gave up; rendered as a plain-text `502`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

use crate::upstream::UpstreamKind;

/// Failure to load the process configuration. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("API key file {path} is empty")]
    EmptyApiKey { path: PathBuf },
}

/// Failure of one upstream request.
///
/// `Network` and `Status` are transport-level failures; `Decode` means the
/// body arrived but did not match the expected record shape.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid {kind} URL: {source}")]
    Url {
        kind: UpstreamKind,
        #[source]
        source: url::ParseError,
    },

    #[error("{kind} request failed: {source}")]
    Network {
        kind: UpstreamKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("{kind} responded with status {status}")]
    Status {
        kind: UpstreamKind,
        status: reqwest::StatusCode,
    },

    #[error("{kind} response did not decode: {source}")]
    Decode {
        kind: UpstreamKind,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    pub fn kind(&self) -> UpstreamKind {
        match self {
            Self::Url { kind, .. }
            | Self::Network { kind, .. }
            | Self::Status { kind, .. }
            | Self::Decode { kind, .. } => *kind,
        }
    }
}

/// Which public endpoint failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    News,
    Weather,
    Bus,
}

impl Feed {
    fn public_message(self) -> &'static str {
        match self {
            Feed::News => "Error retrieving stories",
            Feed::Weather => "Error retrieving weather",
            Feed::Bus => "Error retrieving bus times",
        }
    }
}

/// A handler aborted because one of its upstream calls failed.
///
/// The response never carries a partial JSON body: only a short plain-text
/// message and `502 Bad Gateway`. The cause goes to the log.
#[derive(Debug, Error)]
#[error("{feed:?} feed failed: {source}")]
pub struct FeedError {
    pub feed: Feed,
    #[source]
    pub source: UpstreamError,
}

impl FeedError {
    pub fn new(feed: Feed, source: UpstreamError) -> Self {
        Self { feed, source }
    }
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        error!(
            feed = ?self.feed,
            upstream = %self.source.kind(),
            error = %self.source,
            "Feed aborted; responding with 502"
        );
        (StatusCode::BAD_GATEWAY, self.feed.public_message()).into_response()
    }
}
