//! Infrastructure Layer
//!
//! REST implementations of the domain API traits.

pub mod api;
pub mod rest;

pub use rest::RestCollection;
