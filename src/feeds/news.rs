//! Hacker News front page.
//!
//! Fetches the top-stories index, keeps the first `storiesCount` ids and
//! fans the item lookups out over a two-worker [`FetchPool`].

use axum::Json;
use axum::extract::State;
use std::num::NonZeroUsize;
use tracing::{debug, info, instrument};

use crate::error::{Feed, FeedError, UpstreamError};
use crate::models::Story;
use crate::pool::FetchPool;
use crate::server::AppState;
use crate::upstream::UpstreamClient;

const NEWS_WORKERS: NonZeroUsize = NonZeroUsize::new(2).unwrap();

/// Fetch the first `count` top stories, best first.
///
/// If the index lists fewer than `count` ids, every listed story is returned.
#[instrument(level = "info", skip(upstream))]
pub async fn front_page(upstream: &UpstreamClient, count: usize) -> Result<Vec<Story>, UpstreamError> {
    let mut ids = upstream.top_stories().await?;
    info!(listed = ids.len(), requested = count, "Indexed top stories");
    ids.truncate(count);

    let pool = FetchPool::new(NEWS_WORKERS);
    debug!(stories = ids.len(), workers = pool.workers(), "Fanning out story lookups");
    let stories = pool.fetch_all(ids, |id| upstream.story(id)).await?;

    info!(count = stories.len(), "Fetched story details");
    Ok(stories)
}

/// `GET /news`
pub async fn get_news(State(state): State<AppState>) -> Result<Json<Vec<Story>>, FeedError> {
    front_page(&state.upstream, state.config.stories_count)
        .await
        .map(Json)
        .map_err(|e| FeedError::new(Feed::News, e))
}
