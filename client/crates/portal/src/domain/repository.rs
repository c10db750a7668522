//! Record and API Traits
//!
//! Interfaces between the collection handles and the API modules.
//! Implementations are in the infra layer.

use kernel::id::{ApplicationId, Id, SchemeId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::drafts::SchemeApplication;
use crate::domain::services::ListShape;
use crate::domain::value_objects::ApplicationStatus;
use crate::error::PortalResult;

/// Server-owned record with an `_id`
pub trait Record: Clone + Send + Sync + DeserializeOwned + 'static {
    /// Identifier marker, e.g. `kernel::id::markers::Member`
    type Marker: 'static;

    /// Collection name used in logs and errors
    const COLLECTION: &'static str;

    /// Where the list lives in a list response
    const LIST_SHAPE: ListShape = ListShape::DATA;

    fn id(&self) -> &Id<Self::Marker>;
}

/// Identifier type of record `R`
pub type RecordId<R> = Id<<R as Record>::Marker>;

/// Record the admin forms can create and edit
pub trait Editable: Record {
    type Draft: Serialize + Send + Sync;
}

/// Fetches a whole collection
#[trait_variant::make(ListSource: Send)]
pub trait LocalListSource {
    type Item: Record;

    async fn list(&self) -> PortalResult<Vec<Self::Item>>;
}

/// Create, update and delete on a collection
#[trait_variant::make(RecordWriter: Send)]
pub trait LocalRecordWriter {
    type Item: Editable;

    /// Returns the record as stored by the server
    async fn create(&self, draft: &<Self::Item as Editable>::Draft) -> PortalResult<Self::Item>;

    /// Returns the record as stored by the server
    async fn update(
        &self,
        id: &RecordId<Self::Item>,
        draft: &<Self::Item as Editable>::Draft,
    ) -> PortalResult<Self::Item>;

    async fn remove(&self, id: &RecordId<Self::Item>) -> PortalResult<()>;
}

/// Review decision on an application
#[trait_variant::make(StatusWriter: Send)]
pub trait LocalStatusWriter {
    async fn update_status(&self, id: &ApplicationId, status: ApplicationStatus)
    -> PortalResult<()>;
}

/// Student application to a scheme
#[trait_variant::make(SchemeApplicant: Send)]
pub trait LocalSchemeApplicant {
    /// Returns the server's response body unchanged
    async fn apply_for_scheme(
        &self,
        id: &SchemeId,
        application: &SchemeApplication,
    ) -> PortalResult<Value>;
}
