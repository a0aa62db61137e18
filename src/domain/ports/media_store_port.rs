//! Media store port definition.

use async_trait::async_trait;

use crate::domain::entities::MediaCollection;
use crate::domain::errors::StoreError;

/// Port for persisting the collected media set.
#[async_trait]
pub trait MediaStorePort: Send + Sync {
    /// Writes the collection under `key`, unconditionally replacing any
    /// previous value.
    async fn put_collection(
        &self,
        key: &str,
        collection: &MediaCollection,
    ) -> Result<(), StoreError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use tokio::sync::RwLock;

    use super::*;

    /// Mock media store for testing.
    pub struct MockMediaStore {
        collections: Arc<RwLock<HashMap<String, MediaCollection>>>,
        should_succeed: Arc<AtomicBool>,
    }

    impl MockMediaStore {
        /// Creates an empty mock store.
        pub fn new() -> Self {
            Self {
                collections: Arc::new(RwLock::new(HashMap::new())),
                should_succeed: Arc::new(AtomicBool::new(true)),
            }
        }

        /// Creates a mock store that fails every write.
        pub fn failing() -> Self {
            let mock = Self::new();
            mock.should_succeed.store(false, Ordering::SeqCst);
            mock
        }

        /// Returns the collection last written under `key`, if any.
        pub async fn written(&self, key: &str) -> Option<MediaCollection> {
            self.collections.read().await.get(key).cloned()
        }

        /// Whether nothing has been written.
        pub async fn is_empty(&self) -> bool {
            self.collections.read().await.is_empty()
        }
    }

    impl Default for MockMediaStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl MediaStorePort for MockMediaStore {
        async fn put_collection(
            &self,
            key: &str,
            collection: &MediaCollection,
        ) -> Result<(), StoreError> {
            if self.should_succeed.load(Ordering::SeqCst) {
                self.collections
                    .write()
                    .await
                    .insert(key.to_owned(), collection.clone());
                Ok(())
            } else {
                Err(StoreError::write_failed("mock write failure"))
            }
        }
    }
}
