//! Error types shared across the selection pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Normalized remote-failure shape.
///
/// Every failure that crosses the transport boundary is reduced to this one
/// form: either the remote's own nested error object, or a synthesized record
/// built from the transport-level name, status, and message. Downstream code
/// never inspects ad-hoc nesting. Pure transport failures (connect errors,
/// timeouts) carry no code.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{name}: {message}")]
pub struct ApiError {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// A failure with no usable HTTP status, e.g. a timeout or refused
    /// connection. Never treated as an auth failure.
    pub fn transport(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            message: message.into(),
        }
    }

    pub fn status(code: u16, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: Some(code),
            message: message.into(),
        }
    }

    /// The bearer credential was rejected upstream.
    pub fn is_auth_expired(&self) -> bool {
        self.code == Some(401)
    }

    /// Status to respond with when this error reaches the HTTP layer.
    pub fn status_code(&self) -> u16 {
        self.code.unwrap_or(500)
    }
}

/// Failure of a session-bound library fetch, after the auth-retry envelope
/// has run its course.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LibraryError {
    /// The credential could not be refreshed, or was rejected again after a
    /// refresh. Surfaces as a 401 with an empty body.
    #[error("session credential rejected")]
    Unauthorized,

    /// Any other remote failure, propagated for logging and response shaping.
    #[error(transparent)]
    Api(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_expiry_is_exactly_401() {
        assert!(ApiError::status(401, "UNAUTHENTICATED", "expired").is_auth_expired());
        assert!(!ApiError::status(403, "PERMISSION_DENIED", "no").is_auth_expired());
        assert!(!ApiError::transport("TimeoutError", "timed out").is_auth_expired());
    }

    #[test]
    fn transport_errors_default_to_500() {
        assert_eq!(ApiError::transport("TransportError", "x").status_code(), 500);
        assert_eq!(ApiError::status(429, "RESOURCE_EXHAUSTED", "x").status_code(), 429);
    }
}
