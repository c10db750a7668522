//! Infrastructure Layer
//!
//! Auth endpoints and the persisted session copy.

pub mod auth_api;
pub mod persisted;

pub use auth_api::AuthApi;
pub use persisted::PersistedSession;
