//! Session extraction.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};

use frame_core::domain::UserSession;
use frame_shared::ErrorResponse;

use crate::state::AppState;

/// Cookie carrying the opaque session id.
pub const SESSION_COOKIE: &str = "frame_sid";

/// Authenticated session extractor.
///
/// Use this in handlers to require a logged-in user:
/// ```ignore
/// async fn slideshow(identity: SessionIdentity) -> impl Responder {
///     format!("Hello, {}!", identity.session.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub session_id: String,
    pub session: UserSession,
}

/// Error type for session extraction failures.
#[derive(Debug)]
pub enum SessionRejected {
    MissingCookie,
    UnknownSession,
    Misconfigured,
}

impl std::fmt::Display for SessionRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionRejected::MissingCookie => write!(f, "No session cookie"),
            SessionRejected::UnknownSession => write!(f, "Unknown or expired session"),
            SessionRejected::Misconfigured => write!(f, "Server configuration error"),
        }
    }
}

impl actix_web::ResponseError for SessionRejected {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            SessionRejected::Misconfigured => {
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match self {
            SessionRejected::MissingCookie => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Log in and retry with the session cookie."),
            SessionRejected::UnknownSession => ErrorResponse::new(401, "Unknown Session")
                .with_detail("The session has expired. Please log in again."),
            SessionRejected::Misconfigured => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for SessionIdentity {
    type Error = SessionRejected;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let session_id = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                SessionRejected::Misconfigured
            })?;
            let session_id = session_id.ok_or(SessionRejected::MissingCookie)?;

            match state.sessions.find(&session_id).await {
                Some(session) => Ok(SessionIdentity {
                    session_id,
                    session,
                }),
                None => Err(SessionRejected::UnknownSession),
            }
        })
    }
}
