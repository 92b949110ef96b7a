//! Typed errors for store construction and configuration.
//!
//! Public store operations never return these: failures there degrade to
//! sentinel values (`None` / `true`) with a log line. Only constructors and
//! configuration loading report errors to the caller.

/// Errors that can occur while building a store or loading its configuration.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to Redis: {0}")]
    Connection(String),

    #[error("invalid store configuration: {0}")]
    Config(String),
}

/// Result type for store construction.
pub type StoreResult<T> = Result<T, StoreError>;
