//! Portal Collections Module
//!
//! Layered structure:
//! - `domain/` - Records, drafts, payload validation, API traits
//! - `infra/` - One API module per backend collection
//! - `application/` - Collection handles with a local cache
//!
//! ## Cache Model
//! - Each mounted handle owns an isolated list, fetched once on mount
//! - Writes are pessimistic: the cache changes only after the server agrees
//! - A failed write leaves the cache untouched and reaches the caller
//! - Concurrent writes to one record are rejected, not raced
//! - Dropping a handle cancels its fetch and discards any late result

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::{
    applications::ApplicationsCollection,
    handle::{CollectionHandle, CollectionState},
    read_only::ReadOnlyCollection,
    resource::ResourceCollection,
};
pub use domain::entities::{
    AdmitCard, Application, Institute, Member, Notification, Scheme, SchemeRef, Student,
};
pub use domain::drafts::{
    InstituteDraft, MemberDraft, NotificationDraft, SchemeApplication, SchemeDraft, StudentDraft,
};
pub use domain::repository::{Editable, Record, RecordId};
pub use domain::value_objects::{ApplicationStatus, NotificationKind, SchemeMode};
pub use error::{PayloadError, PortalError, PortalResult};
pub use infra::api::{
    applications::ApplicationsApi, institutes::InstitutesApi, members::MembersApi,
    notifications::NotificationsApi, schemes::SchemesApi, student_portal::StudentPortalApi,
    students::StudentsApi,
};
pub use infra::rest::RestCollection;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
