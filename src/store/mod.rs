//! Expiring challenge store.
//!
//! Provides a [`ChallengeStore`] trait with a Redis-backed implementation:
//! - [`RedisStore`] - works over a single node or a cluster, polymorphic
//!   over the [`Backend`] capability set {set, get, delete, exists}
//! - [`Logger`] - injectable sink for backend error diagnostics

mod backend;
mod logger;
mod redis_store;
mod service;

pub use backend::Backend;
pub use logger::{Logger, TracingLogger, tracing_logger};
pub use redis_store::{RedisStore, connect_from_config};
pub use service::ChallengeStore;
