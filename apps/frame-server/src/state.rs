//! Application state - shared across all handlers.

use std::sync::Arc;

use frame_core::PhotoPicker;
use frame_core::ports::{PhotosApi, SessionStore, TokenRefresher};
use frame_infra::{
    GoogleTokenRefresher, InMemorySelectionCache, InMemorySessionStore, PhotosApiClient,
    SystemClock,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub photos_api: Arc<dyn PhotosApi>,
    pub sessions: Arc<dyn SessionStore>,
    pub refresher: Arc<dyn TokenRefresher>,
    pub picker: Arc<PhotoPicker>,
}

impl AppState {
    /// Wire the ports to their production adapters.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let photos_api = PhotosApiClient::new(
            config.photos.api_endpoint.clone(),
            config.request_timeout,
            config.photos.client_config(),
        )?;
        let refresher = GoogleTokenRefresher::new(
            config.oauth.token_endpoint.clone(),
            config.oauth.client_id.clone(),
            config.oauth.client_secret.clone(),
            config.request_timeout,
        )?;
        let cache = Arc::new(InMemorySelectionCache::new(
            Arc::new(SystemClock),
            config.selection_ttl,
        ));

        tracing::info!("Application state initialized");

        Ok(Self {
            photos_api: Arc::new(photos_api),
            sessions: Arc::new(InMemorySessionStore::new()),
            refresher: Arc::new(refresher),
            picker: Arc::new(PhotoPicker::new(cache)),
        })
    }
}
