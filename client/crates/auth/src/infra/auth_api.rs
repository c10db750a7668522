//! Auth API Module
//!
//! `POST /auth/login` and `POST /auth/register`, sent without a bearer
//! token.

use platform::{ApiClient, HttpTransport, ServerEnvelope};
use serde_json::Value;

use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";

/// Auth endpoints over an anonymous client
pub struct AuthApi<T> {
    client: ApiClient<T>,
}

impl<T> AuthApi<T>
where
    T: HttpTransport + Sync,
{
    pub fn new(transport: T) -> Self {
        Self {
            client: ApiClient::anonymous(transport),
        }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Exchange credentials for a token and the user profile
    pub async fn login(&self, credentials: &LoginRequest) -> AuthResult<LoginResponse> {
        let envelope = refused_unless_success(self.client.post(LOGIN_PATH, credentials).await?)?;
        envelope
            .decode_data::<LoginResponse>()
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }

    /// Create an account; returns the server's record of it
    pub async fn register(&self, data: &RegisterRequest) -> AuthResult<Value> {
        let envelope = refused_unless_success(self.client.post(REGISTER_PATH, data).await?)?;
        Ok(envelope
            .data()
            .cloned()
            .unwrap_or_else(|| envelope.as_value().clone()))
    }
}

fn refused_unless_success(envelope: ServerEnvelope) -> AuthResult<ServerEnvelope> {
    if envelope.success() {
        Ok(envelope)
    } else {
        Err(AuthError::Refused {
            message: envelope.message().map(str::to_string),
        })
    }
}
