//! Application Layer
//!
//! The session store and its configuration.

pub mod config;
pub mod store;

// Re-exports
pub use config::SessionConfig;
pub use store::SessionStore;
