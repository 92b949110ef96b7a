//! # challenge-store
//!
//! An expiring key-value store for short-lived challenge payloads (CAPTCHA
//! answers, one-time codes), backed by a Redis-compatible cache.
//!
//! The store is a thin adapter over the backend client: it namespaces keys
//! with a configurable prefix, hex-encodes payloads so arbitrary bytes travel
//! as text, and delegates all expiration enforcement to the backend via a TTL
//! set at write time. Backend failures never surface as errors from the store
//! operations; they degrade to "absent" (reads) or "present" (existence
//! checks) with the diagnostic sent to an injected logging sink.
//!
//! ## Quick Start
//!
//! ```no_run
//! use challenge_store::prelude::*;
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<(), StoreError> {
//! let store = RedisStore::connect(
//!     "redis://localhost:6379/0",
//!     Duration::from_secs(600),
//!     Some(tracing_logger()),
//!     "captcha:",
//! )
//! .await?;
//!
//! store.set("challenge-id", b"123456").await;
//! let answer = store.get("challenge-id", true).await; // clear-on-read
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`config::StoreConfig`] loads connection settings from environment
//! variables (`REDIS_URL`, `REDIS_CLUSTER_NODES`, `CHALLENGE_TTL_SECONDS`,
//! `CHALLENGE_KEY_PREFIX`); [`store::connect_from_config`] builds the
//! matching single-node or cluster store from it.

pub mod config;
pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{ChallengeStore, RedisStore};

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::{StoreError, StoreResult};
    pub use crate::store::{
        Backend, ChallengeStore, Logger, RedisStore, connect_from_config, tracing_logger,
    };
}
