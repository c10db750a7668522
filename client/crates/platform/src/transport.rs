//! HTTP Transport
//!
//! The wire seam under [`crate::ApiClient`]. The adapter builds an
//! [`ApiRequest`] and a transport turns it into a status and a body.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Outgoing request as seen by a transport
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// API path relative to the base URL, e.g. `/members/42`
    pub path: String,
    /// JSON body, if any
    pub body: Option<Value>,
    /// Bearer token to send in `Authorization`
    pub bearer: Option<String>,
}

/// Raw response: status plus undecoded body text
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait
#[trait_variant::make(HttpTransport: Send)]
pub trait LocalHttpTransport {
    /// Send one request; no retries, no timeout
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("portal-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.config.url_for(&request.path);

        let mut builder = self
            .http
            .request(request.method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
