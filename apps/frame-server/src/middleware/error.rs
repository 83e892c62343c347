//! Application error type and its HTTP mapping.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use frame_core::{ApiError, LibraryError};
use frame_shared::ErrorResponse;

/// Application-level error type.
///
/// Local failures become RFC 7807 bodies; upstream failures keep the
/// normalized `{name, code, message}` shape and the remote's status code.
/// A rejected credential responds 401 with no body at all, which the
/// frontend treats as "log in again".
#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    Upstream(ApiError),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Upstream(err) => write!(f, "Upstream error: {}", err),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Upstream(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized => HttpResponse::Unauthorized().finish(),
            AppError::Upstream(err) => HttpResponse::build(self.status_code()).json(err),
            AppError::BadRequest(detail) => {
                HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError().json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<LibraryError> for AppError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::Unauthorized => AppError::Unauthorized,
            LibraryError::Api(err) => AppError::Upstream(err),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
