//! Session handlers.
//!
//! The OAuth dance itself happens outside this service; its callback
//! registers the resulting tokens here, and logout tears the session down.

use actix_web::cookie::Cookie;
use actix_web::{HttpResponse, web};

use frame_core::domain::UserSession;
use frame_shared::dto::{CreateSessionRequest, SessionResponse};

use crate::middleware::auth::{SESSION_COOKIE, SessionIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/session
pub async fn create_session(
    state: web::Data<AppState>,
    body: web::Json<CreateSessionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.user_id.is_empty() {
        return Err(AppError::BadRequest("userId must not be empty".to_string()));
    }
    if req.access_token.is_empty() || req.refresh_token.is_empty() {
        return Err(AppError::BadRequest(
            "accessToken and refreshToken must not be empty".to_string(),
        ));
    }

    let session_id = uuid::Uuid::new_v4().to_string();
    let session = UserSession {
        user_id: req.user_id,
        display_name: req.name,
        access_token: req.access_token,
        refresh_token: req.refresh_token,
    };
    state.sessions.insert(&session_id, session).await;

    tracing::info!("User has logged in.");

    let cookie = Cookie::build(SESSION_COOKIE, session_id.clone())
        .path("/")
        .http_only(true)
        .finish();

    Ok(HttpResponse::Created()
        .cookie(cookie)
        .json(SessionResponse { session_id }))
}

/// DELETE /api/auth/session
pub async fn end_session(
    state: web::Data<AppState>,
    identity: SessionIdentity,
) -> AppResult<HttpResponse> {
    state.sessions.remove(&identity.session_id).await;

    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();

    Ok(HttpResponse::NoContent().cookie(cookie).finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::{App, http::StatusCode, test};

    use frame_core::PhotoPicker;
    use frame_core::ports::{
        AlbumsOutcome, PhotosApi, RefreshError, SearchOutcome, SearchParams, SessionStore,
        TokenRefresher,
    };
    use frame_infra::{InMemorySelectionCache, InMemorySessionStore, SystemClock};

    struct NoopApi;

    #[async_trait::async_trait]
    impl PhotosApi for NoopApi {
        async fn search(&self, _token: &str, params: SearchParams) -> SearchOutcome {
            SearchOutcome {
                photos: vec![],
                params,
                error: None,
            }
        }

        async fn get_albums(&self, _token: &str) -> AlbumsOutcome {
            AlbumsOutcome::default()
        }
    }

    struct NoopRefresher;

    #[async_trait::async_trait]
    impl TokenRefresher for NoopRefresher {
        async fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, RefreshError> {
            Err(RefreshError::EmptyToken)
        }
    }

    fn test_state() -> AppState {
        let cache = Arc::new(InMemorySelectionCache::new(
            Arc::new(SystemClock),
            Duration::from_secs(55 * 60),
        ));
        AppState {
            photos_api: Arc::new(NoopApi),
            sessions: Arc::new(InMemorySessionStore::new()),
            refresher: Arc::new(NoopRefresher),
            picker: Arc::new(PhotoPicker::new(cache)),
        }
    }

    #[actix_web::test]
    async fn create_session_sets_the_cookie_and_stores_the_record() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/session")
            .set_json(CreateSessionRequest {
                user_id: "user-1".into(),
                name: Some("Ada".into()),
                access_token: "at".into(),
                refresh_token: "rt".into(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("session cookie missing");
        let session_id = cookie.value().to_string();

        let stored = state.sessions.find(&session_id).await.expect("no session");
        assert_eq!(stored.user_id, "user-1");
        assert_eq!(stored.access_token, "at");
    }

    #[actix_web::test]
    async fn create_session_rejects_empty_tokens() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/session")
            .set_json(CreateSessionRequest {
                user_id: "user-1".into(),
                name: None,
                access_token: String::new(),
                refresh_token: "rt".into(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn end_session_removes_the_record() {
        let state = test_state();
        state
            .sessions
            .insert(
                "sid-1",
                UserSession {
                    user_id: "user-1".into(),
                    display_name: None,
                    access_token: "at".into(),
                    refresh_token: "rt".into(),
                },
            )
            .await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/auth/session")
            .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE, "sid-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(state.sessions.find("sid-1").await.is_none());
    }
}
