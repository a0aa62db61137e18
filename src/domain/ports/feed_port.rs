//! Feed port definition.

use async_trait::async_trait;

use crate::domain::entities::FeedPost;
use crate::domain::errors::FeedError;

/// Port for fetching posts from the curated feed.
#[async_trait]
pub trait FeedPort: Send + Sync {
    /// Fetches up to `limit` posts, ordered by the feed's own hot ranking.
    async fn fetch_hot_posts(&self, limit: u32) -> Result<Vec<FeedPost>, FeedError>;

    /// Checks feed API availability and credentials.
    async fn health_check(&self) -> Result<(), FeedError>;
}
