//! Redis-backed media store adapter.

use std::fmt;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tracing::{debug, error, info, warn};

use crate::domain::entities::MediaCollection;
use crate::domain::errors::StoreError;
use crate::domain::ports::MediaStorePort;

/// Media store backed by Redis.
///
/// Uses a `ConnectionManager` for automatic reconnection. Collections are
/// written as plain JSON strings with no TTL; each run replaces the value
/// wholesale, so stale entries never accumulate.
#[derive(Clone)]
pub struct RedisMediaStore {
    conn_manager: ConnectionManager,
    redis_url: String,
}

// ConnectionManager has no Debug impl
impl fmt::Debug for RedisMediaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisMediaStore")
            .field("redis_url", &self.redis_url)
            .finish_non_exhaustive()
    }
}

impl RedisMediaStore {
    /// Connects to the Redis instance at `redis_url`.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the initial connection fails.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to the media store");

        let client = redis::Client::open(redis_url)
            .map_err(|e| StoreError::connection_failed(format!("invalid redis url: {e}")))?;

        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            error!(error = %e, "Failed to create Redis connection manager");
            StoreError::connection_failed(e.to_string())
        })?;

        Ok(Self {
            conn_manager,
            redis_url: redis_url.to_owned(),
        })
    }

    fn encode(collection: &MediaCollection) -> Result<String, StoreError> {
        serde_json::to_string(collection)
            .map_err(|e| StoreError::serialization_failed(e.to_string()))
    }
}

#[async_trait]
impl MediaStorePort for RedisMediaStore {
    async fn put_collection(
        &self,
        key: &str,
        collection: &MediaCollection,
    ) -> Result<(), StoreError> {
        let payload = Self::encode(collection)?;

        let mut conn = self.conn_manager.clone();
        conn.set::<_, _, ()>(key, payload).await.map_err(|e| {
            warn!(key, error = %e, "Failed to write collection to Redis");
            StoreError::write_failed(e.to_string())
        })?;

        debug!(key, items = collection.len(), "Collection written to the media store");

        Ok(())
    }
}
