//! Portal Error Types
//!
//! This module provides collection-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Errors are `Clone` so that the copy kept in a collection's state and the
//! copy returned to the caller are the same value.

use std::sync::Arc;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::ClientError;
use thiserror::Error;

/// Portal-specific result type alias
pub type PortalResult<T> = Result<T, PortalError>;

/// Response body did not have the shape a collection expects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The body looked like a serialized, never-awaited async value
    #[error("Server response contained an unresolved async value")]
    UnresolvedAsync,

    /// Neither an array nor an object with an `items` array
    #[error("Invalid data format from server")]
    InvalidFormat,

    /// Shape was right but a record failed to decode
    #[error("Record does not match the expected shape: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        PayloadError::Decode(err.to_string())
    }
}

/// Portal-specific error variants
#[derive(Debug, Clone, Error)]
pub enum PortalError {
    /// Request failed in the HTTP client adapter
    #[error(transparent)]
    Client(Arc<ClientError>),

    /// Response body rejected by payload validation
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// Another write to the same record has not finished yet
    #[error("A change to {collection} record {id} is already in progress")]
    WriteInFlight { collection: &'static str, id: String },

    /// Form-level check failed before anything was sent
    #[error("{0}")]
    Invalid(&'static str),
}

impl From<ClientError> for PortalError {
    fn from(err: ClientError) -> Self {
        PortalError::Client(Arc::new(err))
    }
}

impl PortalError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortalError::Client(e) => e.kind(),
            PortalError::Payload(_) => ErrorKind::BadGateway,
            PortalError::WriteInFlight { .. } => ErrorKind::Conflict,
            PortalError::Invalid(_) => ErrorKind::UnprocessableEntity,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            PortalError::Client(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PortalError::Client(e) if e.is_unauthorized())
    }

    /// Convert to a user-facing AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            PortalError::Client(e) => e.to_app_error(),
            PortalError::Payload(e) => AppError::bad_gateway(e.to_string()).with_source(e.clone()),
            PortalError::WriteInFlight { .. } => AppError::conflict(self.to_string())
                .with_action("Wait for the previous change to finish"),
            PortalError::Invalid(message) => AppError::new(self.kind(), *message),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self, collection: &'static str, operation: &'static str) {
        match self {
            PortalError::Client(e) => match e.as_ref() {
                ClientError::Transport(_) => {
                    tracing::error!(collection, operation, error = %e, "Collection request failed");
                }
                _ => {
                    tracing::warn!(collection, operation, status = ?e.status(), "Collection request rejected");
                }
            },
            PortalError::Payload(e) => {
                tracing::error!(collection, operation, error = %e, "Collection payload rejected");
            }
            PortalError::WriteInFlight { id, .. } => {
                tracing::debug!(collection, operation, id = %id, "Write already in flight");
            }
            PortalError::Invalid(message) => {
                tracing::debug!(collection, operation, message, "Form rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_keeps_status_and_message() {
        let err = PortalError::from(ClientError::Status {
            status: 404,
            message: Some("Member not found".to_string()),
        });
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_app_error().message(), "Member not found");
    }

    #[test]
    fn test_payload_errors_are_bad_gateway() {
        let err = PortalError::from(PayloadError::UnresolvedAsync);
        assert_eq!(err.kind(), ErrorKind::BadGateway);
        assert_eq!(
            err.to_app_error().message(),
            "Server response contained an unresolved async value"
        );
    }

    #[test]
    fn test_write_in_flight_is_conflict() {
        let err = PortalError::WriteInFlight {
            collection: "members",
            id: "101".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.to_app_error().action().is_some());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_clone_shares_client_error() {
        let err = PortalError::from(ClientError::Unauthorized { message: None });
        let copy = err.clone();
        assert!(copy.is_unauthorized());
        assert_eq!(copy.to_string(), err.to_string());
    }
}
