//! Bounded-concurrency fan-out with order-preserving collection.
//!
//! [`FetchPool::fetch_all`] takes N work items and runs the fetch operation
//! for at most `workers` of them at a time. Items are pulled lazily from the
//! input in order; each completion is tagged with its original index and the
//! single collecting loop drops it into that slot. Completion order never
//! leaks into the output: `result[i]` always belongs to `items[i]`.
//!
//! The first failure aborts the batch. Fetches still in flight are dropped
//! with the stream, and the caller sees only the error.

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::num::NonZeroUsize;
use tracing::{debug, instrument, warn};

/// Fixed-width worker pool for one batch of upstream calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPool {
    workers: NonZeroUsize,
}

impl FetchPool {
    pub const fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Run `fetch` over every item and return the results in input order.
    ///
    /// An empty `items` returns immediately without calling `fetch`.
    #[instrument(level = "debug", skip_all, fields(items = items.len(), workers = self.workers.get()))]
    pub async fn fetch_all<I, T, E, F, Fut>(&self, items: Vec<I>, fetch: F) -> Result<Vec<T>, E>
    where
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let total = items.len();
        if total == 0 {
            debug!("Empty batch; nothing to fetch");
            return Ok(Vec::new());
        }

        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();

        let mut completions = stream::iter(items.into_iter().enumerate())
            .map(|(index, item)| {
                let pending = fetch(item);
                async move { (index, pending.await) }
            })
            .buffer_unordered(self.workers.get());

        let mut filled = 0usize;
        while let Some((index, result)) = completions.next().await {
            match result {
                Ok(value) => {
                    debug!(index, "Item fetched");
                    slots[index] = Some(value);
                    filled += 1;
                }
                Err(e) => {
                    warn!(index, completed = filled, total, error = %e, "Item failed; aborting batch");
                    return Err(e);
                }
            }
        }

        debug_assert_eq!(filled, total);
        debug!(total, "Batch complete");
        Ok(slots.into_iter().flatten().collect())
    }
}
