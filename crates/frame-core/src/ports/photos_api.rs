//! Port over the remote photo library API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Album, MediaItem};
use crate::error::ApiError;

/// Parameters for a media search. Created per logical request; the page token
/// is owned by the pagination loop for its duration and carried back in the
/// outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    /// Date/content filters, passed through to the remote API verbatim.
    /// Mutually exclusive with `album_id` upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl SearchParams {
    pub fn for_album(album_id: impl Into<String>) -> Self {
        Self {
            album_id: Some(album_id.into()),
            ..Self::default()
        }
    }
}

/// Result of a paginated media search: whatever accumulated before the loop
/// stopped, the final parameters, and the terminal error if there was one.
/// The client never raises past its own boundary.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub photos: Vec<MediaItem>,
    pub params: SearchParams,
    pub error: Option<ApiError>,
}

/// Result of an album listing, same partial-accumulation contract.
#[derive(Debug, Clone, Default)]
pub struct AlbumsOutcome {
    pub albums: Vec<Album>,
    pub error: Option<ApiError>,
}

/// The remote "search media items" / "list albums" endpoints, credential
/// passed explicitly per call. Implementations paginate internally: search
/// accumulates until a configured target count or end-of-pages, album listing
/// always drains every page.
#[async_trait]
pub trait PhotosApi: Send + Sync {
    async fn search(&self, access_token: &str, params: SearchParams) -> SearchOutcome;

    async fn get_albums(&self, access_token: &str) -> AlbumsOutcome;
}
