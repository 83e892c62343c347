//! OAuth token-refresh provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use frame_core::ports::{RefreshError, TokenRefresher};

/// Exchanges a refresh token for a new access token at the Google OAuth
/// token endpoint.
pub struct GoogleTokenRefresher {
    http: reqwest::Client,
    token_endpoint: String,
    client_id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl GoogleTokenRefresher {
    pub fn new(
        token_endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            token_endpoint: token_endpoint.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }
}

#[async_trait]
impl TokenRefresher for GoogleTokenRefresher {
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, RefreshError> {
        let response = self
            .http
            .post(&self.token_endpoint)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "token endpoint unreachable");
                RefreshError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "token refresh rejected");
            return Err(RefreshError::Provider(format!("{status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| RefreshError::Transport(err.to_string()))?;

        match token.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(RefreshError::EmptyToken),
        }
    }
}
