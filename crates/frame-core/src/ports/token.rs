use async_trait::async_trait;

/// OAuth token-refresh provider: exchanges a long-lived refresh token for a
/// fresh access token.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, RefreshError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// The provider answered but returned no usable token.
    #[error("Token provider returned an empty access token")]
    EmptyToken,

    #[error("Token provider rejected the refresh: {0}")]
    Provider(String),

    #[error("Token endpoint unreachable: {0}")]
    Transport(String),
}
