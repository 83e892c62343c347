//! In-memory session store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use frame_core::domain::UserSession;
use frame_core::ports::{SessionError, SessionStore};

/// Session records behind an async RwLock. Sessions are lost on restart;
/// users simply log in again.
#[derive(Default)]
pub struct InMemorySessionStore {
    store: RwLock<HashMap<String, UserSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find(&self, session_id: &str) -> Option<UserSession> {
        self.store.read().await.get(session_id).cloned()
    }

    async fn insert(&self, session_id: &str, session: UserSession) {
        self.store
            .write()
            .await
            .insert(session_id.to_string(), session);
    }

    async fn remove(&self, session_id: &str) {
        self.store.write().await.remove(session_id);
    }

    async fn update_access_token(
        &self,
        session_id: &str,
        access_token: &str,
    ) -> Result<UserSession, SessionError> {
        let mut store = self.store.write().await;
        let session = store.get_mut(session_id).ok_or(SessionError::NotFound)?;
        session.access_token = access_token.to_string();
        Ok(session.clone())
    }
}
