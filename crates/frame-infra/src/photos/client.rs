//! Paginated client over the remote media API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, trace};

use frame_core::domain::MediaItem;
use frame_core::ports::{AlbumsOutcome, PhotosApi, SearchOutcome, SearchParams};

use super::transport::{HttpTransport, SearchTransport};

/// Pagination tuning.
#[derive(Debug, Clone)]
pub struct PhotosClientConfig {
    /// Page size injected into every search call.
    pub search_page_size: u32,
    /// Page size for the album listing.
    pub album_page_size: u32,
    /// Search stops once this many images have accumulated.
    pub photos_to_load: usize,
}

impl Default for PhotosClientConfig {
    fn default() -> Self {
        Self {
            search_page_size: 100,
            album_page_size: 50,
            photos_to_load: 150,
        }
    }
}

/// [`PhotosApi`] implementation that drives the pagination loops over a
/// page-level transport.
///
/// Both loops capture terminal errors into the outcome instead of raising,
/// and hand back whatever accumulated before the failure.
pub struct PhotosApiClient<T: SearchTransport = HttpTransport> {
    transport: T,
    config: PhotosClientConfig,
}

impl PhotosApiClient<HttpTransport> {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        config: PhotosClientConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            transport: HttpTransport::new(endpoint, timeout)?,
            config,
        })
    }
}

impl<T: SearchTransport> PhotosApiClient<T> {
    pub fn with_transport(transport: T, config: PhotosClientConfig) -> Self {
        Self { transport, config }
    }
}

#[async_trait]
impl<T: SearchTransport> PhotosApi for PhotosApiClient<T> {
    async fn search(&self, access_token: &str, mut params: SearchParams) -> SearchOutcome {
        params.page_size = Some(self.config.search_page_size);
        let mut photos: Vec<MediaItem> = Vec::new();
        let mut error = None;

        loop {
            debug!(?params, "submitting media search");
            match self.transport.search_page(access_token, &params).await {
                Ok(page) => {
                    // Drop missing entries, keep only images.
                    let items: Vec<MediaItem> = page
                        .media_items
                        .into_iter()
                        .flatten()
                        .filter(MediaItem::is_image)
                        .collect();
                    trace!(
                        found = items.len(),
                        total = photos.len() + items.len(),
                        "search page processed"
                    );
                    photos.extend(items);
                    params.page_token = page.next_page_token;

                    if photos.len() >= self.config.photos_to_load || params.page_token.is_none() {
                        break;
                    }
                }
                Err(err) => {
                    error!(error = %err, "media search failed");
                    error = Some(err);
                    break;
                }
            }
        }

        debug!(total = photos.len(), "search complete");
        SearchOutcome {
            photos,
            params,
            error,
        }
    }

    async fn get_albums(&self, access_token: &str) -> AlbumsOutcome {
        let mut albums = Vec::new();
        let mut error = None;
        let mut page_token: Option<String> = None;

        loop {
            trace!(received = albums.len(), "loading albums");
            match self
                .transport
                .albums_page(access_token, self.config.album_page_size, page_token.as_deref())
                .await
            {
                Ok(page) => {
                    albums.extend(page.albums.into_iter().flatten());
                    page_token = page.next_page_token;
                    if page_token.is_none() {
                        break;
                    }
                }
                Err(err) => {
                    error!(error = %err, "album listing failed");
                    error = Some(err);
                    break;
                }
            }
        }

        debug!(total = albums.len(), "albums loaded");
        AlbumsOutcome { albums, error }
    }
}
