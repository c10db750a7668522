//! Auth Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::{ClientError, StorageError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// The auth endpoint rejected the request or could not be reached
    #[error(transparent)]
    Client(#[from] ClientError),

    /// 2xx response carrying `success: false`
    #[error("Auth request refused")]
    Refused { message: Option<String> },

    /// Login succeeded but the body lacked a token or user
    #[error("Malformed auth response: {0}")]
    MalformedResponse(String),

    /// Persisted session copy could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// Persisted user is not valid JSON for a session user
    #[error("Persisted user is corrupt: {0}")]
    CorruptUser(#[source] serde_json::Error),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Client(e) => e.kind(),
            AuthError::Refused { .. } => ErrorKind::BadRequest,
            AuthError::MalformedResponse(_) => ErrorKind::BadGateway,
            AuthError::Storage(_) | AuthError::CorruptUser(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message to show the user: the server's own string when it sent one,
    /// otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Client(e) => e.server_message().unwrap_or(fallback).to_string(),
            AuthError::Refused { message } => message.as_deref().unwrap_or(fallback).to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self, fallback: &'static str) -> AppError {
        AppError::new(self.kind(), self.user_message(fallback))
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self, operation: &'static str) {
        match self {
            AuthError::Client(ClientError::Transport(e)) => {
                tracing::error!(operation, error = %e, "Auth endpoint unreachable");
            }
            AuthError::Client(e) => {
                tracing::warn!(operation, status = ?e.status(), "Auth request rejected");
            }
            AuthError::Refused { message } => {
                tracing::warn!(operation, message = ?message, "Auth request refused");
            }
            AuthError::MalformedResponse(detail) => {
                tracing::error!(operation, detail = %detail, "Auth response malformed");
            }
            AuthError::Storage(e) => {
                tracing::error!(operation, error = %e, "Session storage failure");
            }
            AuthError::CorruptUser(e) => {
                tracing::warn!(operation, error = %e, "Discarding corrupt persisted user");
            }
        }
    }
}
