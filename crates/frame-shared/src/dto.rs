//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use frame_core::domain::MediaItem;

/// Response for `GET /photos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosResponse {
    pub photos: Vec<MediaItem>,
}

/// Request to register a session after the external OAuth callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response containing the freshly minted session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
}
