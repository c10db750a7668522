//! Presentation Layer
//!
//! Auth DTOs and the role-gated route guard.

pub mod dto;
pub mod guard;

pub use dto::{LoginRequest, LoginResponse, RegisterRequest};
pub use guard::{GuardDecision, Route, RouteGuard};
