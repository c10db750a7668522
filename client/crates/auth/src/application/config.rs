//! Application Configuration
//!
//! Configuration for the session store.

/// Session store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Storage key of the bearer token
    pub token_key: String,
    /// Storage key of the JSON-encoded user
    pub user_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            user_key: "user".to_string(),
        }
    }
}

impl SessionConfig {
    /// Keys prefixed with `namespace`, for several sessions in one store
    pub fn namespaced(namespace: &str) -> Self {
        Self {
            token_key: format!("{namespace}.token"),
            user_key: format!("{namespace}.user"),
        }
    }
}
