//! Application Layer - Collection handles
//!
//! A handle mounts one collection: it starts the initial fetch, keeps the
//! local list and applies the results of successful writes to it.

pub mod applications;
pub mod handle;
mod in_flight;
pub mod read_only;
pub mod resource;
