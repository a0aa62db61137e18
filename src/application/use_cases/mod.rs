//! Use case implementations.

mod collect_media_use_case;
mod populate_cache_use_case;

pub use collect_media_use_case::CollectMediaUseCase;
pub use populate_cache_use_case::{MEDIA_CACHE_KEY, PopulateCacheUseCase};
