use async_trait::async_trait;

use crate::domain::UserSession;

/// Identity/session store. Sessions are keyed by an opaque session id handed
/// to the browser; the record owns the user's bearer credentials.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find(&self, session_id: &str) -> Option<UserSession>;

    async fn insert(&self, session_id: &str, session: UserSession);

    async fn remove(&self, session_id: &str);

    /// Replace the session's access token and return the updated snapshot.
    /// Callers never mutate a session record in place.
    async fn update_access_token(
        &self,
        session_id: &str,
        access_token: &str,
    ) -> Result<UserSession, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,
}
