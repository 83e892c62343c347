use async_trait::async_trait;

use crate::domain::MediaItem;

/// Per-user store for the last computed photo selection.
///
/// One flat namespace keyed by user id; one entry per user, overwritten
/// wholesale on every write, never merged. Entries expire a fixed TTL after
/// the write; a read after expiry behaves as absent regardless of how the
/// backend evicts.
#[async_trait]
pub trait SelectionCache: Send + Sync {
    /// Get the cached selection, or `None` if absent or expired.
    async fn get(&self, user_id: &str) -> Option<Vec<MediaItem>>;

    /// Replace the user's entry and restart its TTL.
    async fn put(&self, user_id: &str, items: &[MediaItem]) -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
