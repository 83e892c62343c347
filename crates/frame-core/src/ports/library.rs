use async_trait::async_trait;

use crate::domain::{Album, MediaItem};
use crate::error::LibraryError;

/// The photo library as seen by the selection orchestrator: credential
/// handling already resolved, failures reduced to [`LibraryError`].
///
/// The session-bound implementation ([`crate::retry::SessionLibrary`]) wraps
/// each fetch in the one-shot credential refresh envelope.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Every album the user has, across all pages.
    async fn list_albums(&self) -> Result<Vec<Album>, LibraryError>;

    /// Image items in one album, up to the configured load target.
    async fn search_album(&self, album_id: &str) -> Result<Vec<MediaItem>, LibraryError>;
}
