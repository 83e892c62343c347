//! The slideshow selection endpoint.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use frame_core::SessionLibrary;
use frame_shared::dto::PhotosResponse;

use crate::middleware::auth::SessionIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PhotosQuery {
    /// `?refresh=true` discards the cached selection and recomputes it.
    #[serde(default)]
    pub refresh: bool,
}

/// GET /photos?refresh=<bool>
///
/// Returns the user's current slideshow selection, computing and caching a
/// fresh one when needed. Remote fetches run inside the session-bound
/// credential-refresh envelope.
pub async fn list_photos(
    state: web::Data<AppState>,
    identity: SessionIdentity,
    query: web::Query<PhotosQuery>,
) -> AppResult<HttpResponse> {
    let library = SessionLibrary::new(
        state.photos_api.clone(),
        state.sessions.clone(),
        state.refresher.clone(),
        identity.session_id.clone(),
    );

    let photos = state
        .picker
        .selection(&identity.session.user_id, &library, query.refresh)
        .await?;

    Ok(HttpResponse::Ok().json(PhotosResponse { photos }))
}
