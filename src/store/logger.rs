//! Logging sink for backend failures.
//!
//! The store never surfaces backend errors to callers, so the only place they
//! go is an injected sink. Modeling the sink as a one-method trait keeps the
//! store decoupled from any logging framework and lets tests capture output
//! with a stub.

use std::sync::Arc;

/// A sink receiving formatted diagnostic lines from the store.
pub trait Logger: Send + Sync {
    fn print(&self, message: &str);
}

/// Default sink that forwards diagnostics to [`tracing::error!`].
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn print(&self, message: &str) {
        tracing::error!(target: "challenge_store", "{}", message);
    }
}

/// Convenience for the common case of logging through `tracing`.
pub fn tracing_logger() -> Arc<dyn Logger> {
    Arc::new(TracingLogger)
}
