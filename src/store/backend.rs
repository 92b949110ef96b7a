//! Minimal capability trait over the Redis client.
//!
//! The adapter only ever issues four commands, so the backend seam is exactly
//! that: {set-with-ttl, get, delete, exists}. Both the single-node
//! [`ConnectionManager`] and the clustered [`ClusterConnection`] satisfy it,
//! and the store never knows which one it is talking to.

use async_trait::async_trait;
use redis::{AsyncCommands, RedisResult, aio::ConnectionManager, cluster_async::ClusterConnection};
use std::time::Duration;

/// The command set the store consumes from a Redis-compatible client.
///
/// # Semantics
///
/// - `set` writes `value` under `key` with `ttl` applied at write time
///   (millisecond resolution, so sub-second TTLs are honored)
/// - `get` returns `Ok(None)` when the key is absent; `Err` is reserved for
///   real command/connection failures
/// - `delete` and `exists` report the number of keys affected/present
///
/// # Implementations
///
/// - [`redis::aio::ConnectionManager`] - single-node client
/// - [`redis::cluster_async::ClusterConnection`] - cluster client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> RedisResult<()>;

    async fn get(&self, key: &str) -> RedisResult<Option<String>>;

    async fn delete(&self, key: &str) -> RedisResult<u64>;

    async fn exists(&self, key: &str) -> RedisResult<u64>;
}

#[async_trait]
impl Backend for ConnectionManager {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> RedisResult<()> {
        let mut conn = self.clone();
        conn.pset_ex::<_, _, ()>(key, value, ttl.as_millis() as u64)
            .await
    }

    // `get` and `exists` are fully qualified: the receiver implements both
    // this trait and `AsyncCommands`, and the trait's own methods would
    // shadow the command versions.
    async fn get(&self, key: &str) -> RedisResult<Option<String>> {
        let mut conn = self.clone();
        AsyncCommands::get::<_, Option<String>>(&mut conn, key).await
    }

    async fn delete(&self, key: &str) -> RedisResult<u64> {
        let mut conn = self.clone();
        conn.del::<_, u64>(key).await
    }

    async fn exists(&self, key: &str) -> RedisResult<u64> {
        let mut conn = self.clone();
        AsyncCommands::exists::<_, u64>(&mut conn, key).await
    }
}

#[async_trait]
impl Backend for ClusterConnection {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> RedisResult<()> {
        let mut conn = self.clone();
        conn.pset_ex::<_, _, ()>(key, value, ttl.as_millis() as u64)
            .await
    }

    async fn get(&self, key: &str) -> RedisResult<Option<String>> {
        let mut conn = self.clone();
        AsyncCommands::get::<_, Option<String>>(&mut conn, key).await
    }

    async fn delete(&self, key: &str) -> RedisResult<u64> {
        let mut conn = self.clone();
        conn.del::<_, u64>(key).await
    }

    async fn exists(&self, key: &str) -> RedisResult<u64> {
        let mut conn = self.clone();
        AsyncCommands::exists::<_, u64>(&mut conn, key).await
    }
}
