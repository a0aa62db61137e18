//! Run-level error for the populate-cache handler.

use thiserror::Error;

use super::{FeedError, StoreError};

/// Anything that can abort a collection run.
///
/// Propagated unhandled to the invoking scheduler; nothing is cached on
/// failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Collection failed before anything was written.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// The collection could not be written to the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}
