//! Media collection use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::MediaCollection;
use crate::domain::errors::FeedError;
use crate::domain::ports::FeedPort;
use crate::domain::services::MediaResolver;

/// Runs the collection pipeline: fetch hot posts, resolve each to media,
/// keep only posts that resolved, dedup by title.
#[derive(Clone)]
pub struct CollectMediaUseCase {
    feed_port: Arc<dyn FeedPort>,
    fetch_limit: u32,
}

impl CollectMediaUseCase {
    /// Creates new collect use case.
    #[must_use]
    pub fn new(feed_port: Arc<dyn FeedPort>, fetch_limit: u32) -> Self {
        Self {
            feed_port,
            fetch_limit,
        }
    }

    /// Executes one collection run.
    ///
    /// # Errors
    /// Any feed failure propagates untouched; there are no retries and no
    /// partial results.
    pub async fn execute(&self) -> Result<MediaCollection, FeedError> {
        debug!(limit = self.fetch_limit, "Fetching hot posts from the curated feed");

        let posts = self
            .feed_port
            .fetch_hot_posts(self.fetch_limit)
            .await
            .map_err(|e| {
                warn!(error = %e, "Feed fetch failed");
                e
            })?;

        let fetched = posts.len();
        let mut collection = MediaCollection::new();
        let mut displaced = 0usize;

        for post in &posts {
            if let Some(item) = MediaResolver::resolve(post) {
                if collection.insert(item).is_some() {
                    displaced += 1;
                }
            }
        }

        info!(
            fetched,
            kept = collection.len(),
            displaced,
            "Collected media from the feed"
        );

        Ok(collection)
    }
}
