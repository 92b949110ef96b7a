//! Store trait: the operation contract for challenge payloads.

use async_trait::async_trait;

/// Expiring key-value store for short-lived challenge payloads.
///
/// Implementations must be thread-safe and degrade gracefully: a backend
/// failure never propagates to the caller as an error, it is logged and
/// converted to the sentinel result documented on each method. Callers
/// therefore cannot distinguish "key genuinely absent" from "backend
/// unreachable" - for ephemeral challenge data both are equally safe to treat
/// as not found.
///
/// # Implementations
///
/// - [`crate::store::RedisStore`] - Redis-backed store, single-node or cluster
#[async_trait]
pub trait ChallengeStore: Send + Sync {
    /// Stores `payload` under `id` with the configured time-to-live.
    ///
    /// The payload may be any byte sequence, including empty. A backend
    /// failure is logged and swallowed; there is no success signal.
    async fn set(&self, id: &str, payload: &[u8]);

    /// Retrieves the payload stored under `id`.
    ///
    /// With `clear` set, the entry is deleted after a successful read so it
    /// cannot be read again.
    ///
    /// # Returns
    ///
    /// - `Some(payload)` when the key is present and decodes cleanly
    /// - `None` when the key is absent (silent), the backend call fails
    ///   (logged), the stored text is not valid hex (logged), or `clear` was
    ///   requested and the delete failed (logged; the decoded value is
    ///   discarded so the entry stays findable rather than being returned
    ///   with cleanup pending)
    async fn get(&self, id: &str, clear: bool) -> Option<Vec<u8>>;

    /// Reports whether an entry exists under `id`.
    ///
    /// Fail-open: when the backend call itself errors, this returns `true`.
    /// An unknown-state challenge must count as present so it cannot be
    /// re-issued; do not "fix" this to match `get`'s fail-to-absent policy.
    async fn exists(&self, id: &str) -> bool;
}
