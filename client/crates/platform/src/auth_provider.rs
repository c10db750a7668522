//! Auth Provider Interface
//!
//! The HTTP client adapter never reaches into global session state.
//! It asks an injected provider for the bearer token and reports 401s back
//! to it; the session store is the production implementation.

/// Source of the bearer token and sink for authorization failures
pub trait AuthProvider: Send + Sync {
    /// Token to attach to the next request, read at call time
    fn token(&self) -> Option<String>;

    /// Called once per 401 response, before the error reaches the caller
    ///
    /// `rejected_token` is the token that was sent with the failed request
    /// (`None` if the request went out anonymously). Returns `true` if the
    /// provider cleared its session as a result.
    fn on_unauthorized(&self, rejected_token: Option<&str>) -> bool;
}

/// Provider for anonymous clients (login, register)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl AuthProvider for NoAuth {
    fn token(&self) -> Option<String> {
        None
    }

    fn on_unauthorized(&self, _rejected_token: Option<&str>) -> bool {
        false
    }
}

/// Fixed token provider, handy for tools and tests
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl AuthProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }

    fn on_unauthorized(&self, _rejected_token: Option<&str>) -> bool {
        false
    }
}
