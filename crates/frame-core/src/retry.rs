//! Session-bound library access with a one-shot credential refresh.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Album, MediaItem, UserSession};
use crate::error::{ApiError, LibraryError};
use crate::ports::{MediaLibrary, PhotosApi, SearchParams, SessionStore, TokenRefresher};

/// [`MediaLibrary`] implementation for one user session.
///
/// Each fetch runs inside a retry envelope with an explicit budget of exactly
/// one refresh-and-retry: the first 401 triggers an out-of-band token refresh,
/// the new credential is persisted into the session store (yielding a fresh
/// snapshot), and the fetch is re-invoked once. A failed refresh, an empty
/// replacement token, or a second 401 all end in [`LibraryError::Unauthorized`].
/// Any other error propagates without a retry.
pub struct SessionLibrary {
    api: Arc<dyn PhotosApi>,
    sessions: Arc<dyn SessionStore>,
    refresher: Arc<dyn TokenRefresher>,
    session_id: String,
}

impl SessionLibrary {
    pub fn new(
        api: Arc<dyn PhotosApi>,
        sessions: Arc<dyn SessionStore>,
        refresher: Arc<dyn TokenRefresher>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            sessions,
            refresher,
            session_id: session_id.into(),
        }
    }

    async fn current_session(&self) -> Result<UserSession, LibraryError> {
        self.sessions
            .find(&self.session_id)
            .await
            .ok_or(LibraryError::Unauthorized)
    }

    /// Refresh the access token and persist it, returning the new session
    /// snapshot. Never mutates the previous snapshot.
    async fn refresh_credential(&self, session: &UserSession) -> Result<UserSession, LibraryError> {
        let token = self
            .refresher
            .refresh_access_token(&session.refresh_token)
            .await
            .map_err(|_| LibraryError::Unauthorized)?;
        if token.is_empty() {
            return Err(LibraryError::Unauthorized);
        }

        self.sessions
            .update_access_token(&self.session_id, &token)
            .await
            .map_err(|_| LibraryError::Unauthorized)
    }

    /// Decide how a terminal fetch error ends the envelope. Returns the
    /// refreshed session when a retry is warranted.
    async fn handle_fetch_error(
        &self,
        session: &UserSession,
        error: ApiError,
        retries_left: &mut u8,
    ) -> Result<UserSession, LibraryError> {
        if !error.is_auth_expired() {
            return Err(LibraryError::Api(error));
        }
        if *retries_left == 0 {
            return Err(LibraryError::Unauthorized);
        }
        *retries_left -= 1;
        self.refresh_credential(session).await
    }
}

#[async_trait]
impl MediaLibrary for SessionLibrary {
    async fn list_albums(&self) -> Result<Vec<Album>, LibraryError> {
        let mut session = self.current_session().await?;
        let mut retries_left: u8 = 1;

        loop {
            let outcome = self.api.get_albums(&session.access_token).await;
            match outcome.error {
                None => return Ok(outcome.albums),
                Some(error) => {
                    session = self
                        .handle_fetch_error(&session, error, &mut retries_left)
                        .await?;
                }
            }
        }
    }

    async fn search_album(&self, album_id: &str) -> Result<Vec<MediaItem>, LibraryError> {
        let mut session = self.current_session().await?;
        let mut retries_left: u8 = 1;

        loop {
            let params = SearchParams::for_album(album_id);
            let outcome = self.api.search(&session.access_token, params).await;
            match outcome.error {
                None => return Ok(outcome.photos),
                Some(error) => {
                    session = self
                        .handle_fetch_error(&session, error, &mut retries_left)
                        .await?;
                }
            }
        }
    }
}
