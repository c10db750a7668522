//! Shared Kernel - Vocabulary shared by every client crate
//!
//! This crate contains the "smallest core" of the portal client:
//! - Common error types and result aliases
//! - Typed opaque record identifiers
//!
//! **Design Principle**: Only include things that carry the same meaning
//! for the session layer and for every collection.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;
