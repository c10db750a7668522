//! API Modules
//!
//! One module per backend collection. Each picks method, path and body and
//! delegates to the shared client; nothing here caches or retries.

pub mod applications;
pub mod institutes;
pub mod members;
pub mod notifications;
pub mod schemes;
pub mod student_portal;
pub mod students;
