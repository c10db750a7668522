//! HTTP Client Adapter
//!
//! Wraps a transport with the portal's request conventions:
//! JSON bodies, bearer token from the injected [`AuthProvider`], and
//! centralized 401 handling.

use std::sync::Arc;

use kernel::error::kind::ErrorKind;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::auth_provider::{AuthProvider, NoAuth};
use crate::envelope::{ServerEnvelope, error_message};
use crate::error::{ClientError, ClientResult};
use crate::transport::{ApiRequest, HttpTransport};

/// Portal API client
///
/// Successful responses are returned unmodified as a [`ServerEnvelope`].
/// Every failure is a single `Err`; on 401 the auth provider is told
/// before the error is returned, so callers must not assume the session
/// survived a failed request.
pub struct ApiClient<T> {
    transport: T,
    auth: Arc<dyn AuthProvider>,
}

impl<T> ApiClient<T>
where
    T: HttpTransport + Sync,
{
    pub fn new(transport: T, auth: Arc<dyn AuthProvider>) -> Self {
        Self { transport, auth }
    }

    /// Client that never sends a token (login, register)
    pub fn anonymous(transport: T) -> Self {
        Self::new(transport, Arc::new(NoAuth))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and return the decoded body
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<ServerEnvelope> {
        let token = self.auth.token();

        let request = ApiRequest {
            method: method.clone(),
            path: path.to_string(),
            body,
            bearer: token.clone(),
        };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%method, path, error = %e, "Request failed before a response");
                return Err(e.into());
            }
        };

        tracing::debug!(%method, path, status = response.status, "Response received");

        if response.is_success() {
            return ServerEnvelope::from_body(&response.body);
        }

        let message = error_message(&response.body);

        if response.status == 401 {
            let cleared = self.auth.on_unauthorized(token.as_deref());
            tracing::warn!(%method, path, cleared, "Request rejected as unauthorized");
            return Err(ClientError::Unauthorized { message });
        }

        if ErrorKind::from_status_code(response.status).is_server_error() {
            tracing::error!(%method, path, status = response.status, "Server error");
        }

        Err(ClientError::Status {
            status: response.status,
            message,
        })
    }

    pub async fn get(&self, path: &str) -> ClientResult<ServerEnvelope> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ServerEnvelope> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ServerEnvelope> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<ServerEnvelope> {
        self.request(Method::DELETE, path, None).await
    }
}
