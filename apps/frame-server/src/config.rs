//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use frame_infra::PhotosClientConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub photos: PhotosConfig,
    pub oauth: OAuthConfig,
    /// TTL for cached selections. Must stay below the 60-minute lifetime of
    /// the media base URLs; defaults to 55 minutes.
    pub selection_ttl: Duration,
    /// Bound on every remote call so a stuck upstream can't hang a request
    /// forever.
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct PhotosConfig {
    pub api_endpoint: String,
    pub search_page_size: u32,
    pub album_page_size: u32,
    pub photos_to_load: usize,
}

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub token_endpoint: String,
    pub client_id: String,
    pub client_secret: String,
}

impl AppConfig {
    /// Load configuration from environment variables, with defaults matching
    /// the Google Photos Library API.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed_var("PORT", 8080),
            photos: PhotosConfig {
                api_endpoint: env::var("PHOTOS_API_ENDPOINT")
                    .unwrap_or_else(|_| "https://photoslibrary.googleapis.com".to_string()),
                search_page_size: parsed_var("SEARCH_PAGE_SIZE", 100),
                album_page_size: parsed_var("ALBUM_PAGE_SIZE", 50),
                photos_to_load: parsed_var("PHOTOS_TO_LOAD", 150),
            },
            oauth: OAuthConfig {
                token_endpoint: env::var("OAUTH_TOKEN_ENDPOINT")
                    .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
                client_id: env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
                client_secret: env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            },
            selection_ttl: Duration::from_secs(parsed_var("SELECTION_TTL_SECS", 55 * 60)),
            request_timeout: Duration::from_secs(parsed_var("REQUEST_TIMEOUT_SECS", 30)),
        }
    }
}

impl PhotosConfig {
    pub fn client_config(&self) -> PhotosClientConfig {
        PhotosClientConfig {
            search_page_size: self.search_page_size,
            album_page_size: self.album_page_size,
            photos_to_load: self.photos_to_load,
        }
    }
}

fn parsed_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
