//! Redis-backed challenge store.

use super::backend::Backend;
use super::logger::{Logger, tracing_logger};
use super::service::ChallengeStore;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager, cluster::ClusterClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Expiring store for challenge payloads, backed by a Redis-compatible client.
///
/// Payloads are hex-encoded before transmission so arbitrary bytes travel as
/// text, and every logical id is namespaced with the configured prefix. All
/// operations are fail-open toward the caller: backend errors are sent to the
/// injected logger and never propagate. Expiration is enforced entirely by
/// the backend via the TTL set at write time.
///
/// The store holds no mutable state of its own, so a single instance can be
/// shared across tasks without locking.
pub struct RedisStore<B: Backend> {
    backend: B,
    expiration: Duration,
    logger: Option<Arc<dyn Logger>>,
    prefix: String,
}

impl RedisStore<ConnectionManager> {
    /// Connects to a single Redis node, validates the connection with a PING,
    /// and wraps it in a store.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `expiration` - time-to-live applied to every write
    /// - `logger` - optional sink for backend error diagnostics; `None`
    ///   discards them
    /// - `prefix` - namespace prepended to every logical id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(
        redis_url: &str,
        expiration: Duration,
        logger: Option<Arc<dyn Logger>>,
        prefix: impl Into<String>,
    ) -> StoreResult<Self> {
        info!(
            "connecting to Redis at {}",
            crate::config::mask_connection_string(redis_url)
        );

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("connected to Redis challenge store");

        Ok(Self::with_backend(manager, expiration, logger, prefix))
    }
}

impl RedisStore<redis::cluster_async::ClusterConnection> {
    /// Connects to a Redis cluster and wraps it in a store.
    ///
    /// Same contract as [`RedisStore::connect`], but `nodes` lists the
    /// initial cluster members.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the cluster client cannot be
    /// built or no node accepts the connection.
    pub async fn connect_cluster(
        nodes: Vec<String>,
        expiration: Duration,
        logger: Option<Arc<dyn Logger>>,
        prefix: impl Into<String>,
    ) -> StoreResult<Self> {
        let client = ClusterClient::new(nodes).map_err(|e| {
            StoreError::Connection(format!("failed to create Redis cluster client: {}", e))
        })?;

        let mut conn = client.get_async_connection().await.map_err(|e| {
            StoreError::Connection(format!("failed to connect to Redis cluster: {}", e))
        })?;

        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis cluster PING failed: {}", e)))?;

        info!("connected to Redis cluster challenge store");

        Ok(Self::with_backend(conn, expiration, logger, prefix))
    }
}

impl<B: Backend> RedisStore<B> {
    /// Wraps an already-constructed backend client (or a test stub).
    pub fn with_backend(
        backend: B,
        expiration: Duration,
        logger: Option<Arc<dyn Logger>>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            expiration,
            logger,
            prefix: prefix.into(),
        }
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, id: &str) -> String {
        format!("{}{}", self.prefix, id)
    }

    fn print(&self, message: String) {
        if let Some(out) = &self.logger {
            out.print(&message);
        }
    }
}

/// Builds a store from configuration, picking the cluster client when
/// cluster nodes are configured. Diagnostics go to the default
/// [`tracing`]-backed logger.
///
/// # Errors
///
/// Returns [`StoreError::Config`] when the configuration fails validation and
/// [`StoreError::Connection`] when the backend cannot be reached.
pub async fn connect_from_config(config: &StoreConfig) -> StoreResult<Box<dyn ChallengeStore>> {
    config
        .validate()
        .map_err(|e| StoreError::Config(e.to_string()))?;

    let logger = Some(tracing_logger());

    if let Some(nodes) = &config.cluster_nodes {
        let store = RedisStore::connect_cluster(
            nodes.clone(),
            config.ttl(),
            logger,
            config.key_prefix.clone(),
        )
        .await?;
        Ok(Box::new(store))
    } else {
        let store = RedisStore::connect(
            &config.redis_url,
            config.ttl(),
            logger,
            config.key_prefix.clone(),
        )
        .await?;
        Ok(Box::new(store))
    }
}

#[async_trait]
impl<B: Backend> ChallengeStore for RedisStore<B> {
    async fn set(&self, id: &str, payload: &[u8]) {
        let key = self.build_key(id);
        let encoded = hex::encode(payload);

        if let Err(e) = self.backend.set(&key, &encoded, self.expiration).await {
            self.print(format!("redis execution set command error: {}", e));
        }
    }

    async fn get(&self, id: &str, clear: bool) -> Option<Vec<u8>> {
        let key = self.build_key(id);

        // Ok(None) is the absent-key case and stays silent; Err is a real
        // command or connection failure.
        let value = match self.backend.get(&key).await {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                self.print(format!("redis execution get command error: {}", e));
                return None;
            }
        };

        let payload = match hex::decode(&value) {
            Ok(payload) => payload,
            Err(e) => {
                self.print(format!("hex decoding error: {}", e));
                return None;
            }
        };

        if clear {
            // Discard the decoded payload when cleanup fails: the entry
            // stays findable for a later attempt instead of being handed out
            // with the delete still pending.
            if let Err(e) = self.backend.delete(&key).await {
                self.print(format!("redis execution del command error: {}", e));
                return None;
            }
        }

        Some(payload)
    }

    async fn exists(&self, id: &str) -> bool {
        let key = self.build_key(id);

        match self.backend.exists(&key).await {
            Ok(n) => n > 0,
            // Fail-open: an unknown-state challenge counts as present so it
            // cannot be re-issued.
            Err(_) => true,
        }
    }
}
