//! Auth (Session) Client Module
//!
//! Layered structure:
//! - `domain/` - Roles, the session user and the session state machine
//! - `application/` - The session store (initialize, login, register, logout)
//! - `infra/` - Auth API module and persisted session copy
//! - `presentation/` - Request/response DTOs and the route guard
//!
//! ## Session Model
//! - A bearer token plus the user profile, persisted under two keys
//! - Rehydration trusts the persisted copy; stale tokens surface as a 401
//! - Any 401 carrying the current token clears the session exactly once
//! - Registration never establishes a session

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::store::SessionStore;
pub use domain::entity::session::{SessionPhase, SessionState};
pub use domain::entity::user::SessionUser;
pub use domain::value_object::user_role::Role;
pub use error::{AuthError, AuthResult};
pub use infra::auth_api::AuthApi;
pub use presentation::dto::{LoginRequest, LoginResponse, RegisterRequest};
pub use presentation::guard::{GuardDecision, Route, RouteGuard};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
