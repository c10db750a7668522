//! Client Error Types
//!
//! Failure taxonomy of the HTTP client adapter:
//! transport failures, non-2xx statuses (401 singled out) and
//! bodies that are not JSON.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure below HTTP: the request never produced a status
#[derive(Debug, Error)]
pub enum TransportError {
    /// reqwest failed to send or read the response
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Server could not be reached (used by non-reqwest transports)
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

/// Errors surfaced by [`crate::ApiClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or network failure
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// 401 from the server; the session has already been notified
    #[error("Unauthorized")]
    Unauthorized {
        /// Server-supplied message, if any
        message: Option<String>,
    },

    /// Any other non-2xx status
    #[error("Request failed with status {status}")]
    Status {
        status: u16,
        /// Server-supplied message, if any
        message: Option<String>,
    },

    /// Body could not be encoded or decoded as JSON
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(_) | ClientError::Json(_) => None,
        }
    }

    /// The server's own error string (`message` field of the body)
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized { message } | ClientError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport(_) => ErrorKind::Network,
            ClientError::Unauthorized { .. } => ErrorKind::Unauthorized,
            ClientError::Status { status, .. } => ErrorKind::from_status_code(*status),
            ClientError::Json(_) => ErrorKind::BadGateway,
        }
    }

    /// Convert to a user-facing AppError
    ///
    /// The message is the server's string when it sent one, otherwise a
    /// static text for the error class.
    pub fn to_app_error(&self) -> AppError {
        let server = self.server_message().map(str::to_string);
        match self {
            ClientError::Transport(_) => AppError::network("Could not reach the server"),
            ClientError::Unauthorized { .. } => {
                AppError::unauthorized(server.unwrap_or_else(|| "Your session has expired".into()))
                    .with_action("Please sign in again")
            }
            ClientError::Status { status, .. } => {
                AppError::from_status(*status, server.unwrap_or_else(|| "Request failed".into()))
            }
            ClientError::Json(_) => AppError::bad_gateway("Unexpected response from server"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_server_message() {
        let err = ClientError::Status {
            status: 409,
            message: Some("You have already applied to this scheme".to_string()),
        };
        let app = err.to_app_error();
        assert_eq!(app.kind(), ErrorKind::Conflict);
        assert_eq!(app.message(), "You have already applied to this scheme");
    }

    #[test]
    fn test_unauthorized_maps_to_sign_in_action() {
        let err = ClientError::Unauthorized { message: None };
        assert_eq!(err.status(), Some(401));
        let app = err.to_app_error();
        assert_eq!(app.message(), "Your session has expired");
        assert_eq!(app.action(), Some("Please sign in again"));
    }

    #[test]
    fn test_transport_error_is_network_kind() {
        let err = ClientError::from(TransportError::Unreachable("connection refused".into()));
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_app_error().message(), "Could not reach the server");
    }
}
