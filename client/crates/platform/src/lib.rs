//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the client's shared technical foundations:
//! - HTTP client adapter (base URL, JSON, bearer token, 401 handling)
//! - Transport seam with a reqwest implementation
//! - Auth-provider interface implemented by the session store
//! - Persisted key/value storage for the session
//! - Client configuration

pub mod auth_provider;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod storage;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use auth_provider::{AuthProvider, NoAuth};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::ServerEnvelope;
pub use error::{ClientError, ClientResult, TransportError};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

/// HTTP method re-export so that dependent crates need not name reqwest
pub use reqwest::Method;
