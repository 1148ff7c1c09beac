//! Aggregator handlers, one per public endpoint.
//!
//! Each feed follows the same two-phase shape:
//!
//! 1. **Collect**: derive the work list from configuration (and, for news,
//!    from an index call) and fetch every record from the upstream
//! 2. **Respond**: serialize the ordered records as a JSON array
//!
//! # Feeds
//!
//! | Endpoint | Module | Upstream | Fan-out |
//! |----------|--------|----------|---------|
//! | `/news` | [`news`] | Hacker News | [`FetchPool`](crate::pool::FetchPool), 2 workers |
//! | `/weather` | [`weather`] | AccuWeather | single call |
//! | `/bus` | [`bus`] | Dublin Bus RTPI | [`FetchPool`](crate::pool::FetchPool), up to 4 workers |
//!
//! Any upstream failure aborts the whole feed; see [`FeedError`](crate::error::FeedError).

pub mod bus;
pub mod news;
pub mod weather;
