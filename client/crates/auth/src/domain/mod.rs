//! Domain Layer
//!
//! Roles, the signed-in user and the session state machine.

pub mod entity;
pub mod value_object;

// Re-exports
pub use entity::{
    session::{SessionPhase, SessionState},
    user::SessionUser,
};
pub use value_object::user_role::Role;
