use serde::{Deserialize, Serialize};

/// A logged-in user's session record as held by the session store.
///
/// The access token is a short-lived bearer credential owned by the session,
/// not by any single request. It is replaced wholesale when the auth-retry
/// path refreshes it; callers always work on an immutable snapshot obtained
/// from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub display_name: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
}
