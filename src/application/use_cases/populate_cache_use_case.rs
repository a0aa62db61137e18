//! Populate-cache use case implementation.

use std::sync::Arc;

use tracing::info;

use crate::application::dto::HandlerResponse;
use crate::application::use_cases::CollectMediaUseCase;
use crate::domain::errors::PipelineError;
use crate::domain::ports::MediaStorePort;

/// Cache key the display surface reads the collection from.
pub const MEDIA_CACHE_KEY: &str = "all_media";

/// Collects media from the feed and writes it through to the cache store.
///
/// This is the scheduler-facing handler: one execution is one full run, and
/// any failure aborts it before the cache is touched.
#[derive(Clone)]
pub struct PopulateCacheUseCase {
    collect: CollectMediaUseCase,
    store_port: Arc<dyn MediaStorePort>,
}

impl PopulateCacheUseCase {
    /// Creates new populate-cache use case.
    #[must_use]
    pub fn new(collect: CollectMediaUseCase, store_port: Arc<dyn MediaStorePort>) -> Self {
        Self {
            collect,
            store_port,
        }
    }

    /// Executes one populate run.
    ///
    /// # Errors
    /// Feed and store failures propagate to the caller; nothing is cached on
    /// failure.
    pub async fn execute(&self) -> Result<HandlerResponse, PipelineError> {
        info!("Populating the media cache");

        let collection = self.collect.execute().await?;
        self.store_port
            .put_collection(MEDIA_CACHE_KEY, &collection)
            .await?;

        info!(
            items = collection.len(),
            key = MEDIA_CACHE_KEY,
            "Media cache populated"
        );

        Ok(HandlerResponse::success())
    }
}
