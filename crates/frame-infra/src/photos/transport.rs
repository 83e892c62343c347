//! Page-level HTTP transport for the remote media API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use frame_core::domain::{Album, MediaItem};
use frame_core::error::ApiError;
use frame_core::ports::SearchParams;

/// One page of media search results. The item list may be sparse and contain
/// missing elements, hence `Option` entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub media_items: Vec<Option<MediaItem>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One page of the album listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsPage {
    #[serde(default)]
    pub albums: Vec<Option<Album>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Fetches single pages; the pagination loops live in
/// [`PhotosApiClient`](super::PhotosApiClient) so tests can drive them with
/// canned pages.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn search_page(
        &self,
        access_token: &str,
        params: &SearchParams,
    ) -> Result<SearchPage, ApiError>;

    async fn albums_page(
        &self,
        access_token: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<AlbumsPage, ApiError>;
}

/// Remote error envelope: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: RemoteError,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// reqwest-backed transport with bearer auth and a bounded per-call timeout.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(transport_error)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(normalize_failure(status, &body))
        }
    }
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn search_page(
        &self,
        access_token: &str,
        params: &SearchParams,
    ) -> Result<SearchPage, ApiError> {
        let response = self
            .http
            .post(format!("{}/v1/mediaItems:search", self.endpoint))
            .bearer_auth(access_token)
            .json(params)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_json(response).await
    }

    async fn albums_page(
        &self,
        access_token: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<AlbumsPage, ApiError> {
        let mut request = self
            .http
            .get(format!("{}/v1/albums", self.endpoint))
            .bearer_auth(access_token)
            .query(&[("pageSize", page_size.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await.map_err(transport_error)?;
        Self::read_json(response).await
    }
}

/// Normalize a non-2xx response into the `{name, code, message}` shape.
/// The remote's own nested error object takes precedence; anything else is
/// synthesized from the HTTP status.
fn normalize_failure(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ApiError {
            name: envelope
                .error
                .status
                .unwrap_or_else(|| "ApiError".to_string()),
            code: Some(envelope.error.code.unwrap_or(status.as_u16())),
            message: envelope.error.message,
        },
        Err(_) => ApiError::status(
            status.as_u16(),
            "StatusCodeError",
            status.canonical_reason().unwrap_or("remote call failed"),
        ),
    }
}

/// Normalize a transport-level failure. Timeouts and connection errors carry
/// no status code and are never mistaken for an auth failure.
fn transport_error(err: reqwest::Error) -> ApiError {
    let name = if err.is_timeout() {
        "TimeoutError"
    } else if err.is_decode() {
        "DecodeError"
    } else {
        "TransportError"
    };
    tracing::error!(error = %err, name, "remote call failed");
    ApiError::transport(name, err.to_string())
}
