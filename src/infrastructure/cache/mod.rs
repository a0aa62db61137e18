//! Media cache store adapter.

mod redis_store;

pub use redis_store::RedisMediaStore;
