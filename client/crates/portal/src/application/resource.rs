//! Resource Collection
//!
//! Mounted CRUD collection (members, institutes, students, schemes,
//! notifications). Every write waits for the initial fetch, then goes to
//! the server; the cached list changes only after it succeeds.

use std::ops::Deref;
use std::sync::Arc;

use kernel::id::SchemeId;
use serde_json::Value;

use crate::application::handle::CollectionHandle;
use crate::domain::drafts::SchemeApplication;
use crate::domain::entities::Scheme;
use crate::domain::repository::{
    Editable, ListSource, Record, RecordId, RecordWriter, SchemeApplicant,
};
use crate::error::{PortalError, PortalResult};

pub struct ResourceCollection<R: Editable, A> {
    handle: CollectionHandle<R>,
    api: Arc<A>,
}

impl<R, A> ResourceCollection<R, A>
where
    R: Editable,
    A: ListSource<Item = R> + RecordWriter<Item = R> + Sync + 'static,
{
    /// Mount and start the initial fetch
    pub fn mount(api: A) -> Self {
        let api = Arc::new(api);
        Self {
            handle: CollectionHandle::mount(api.clone()),
            api,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Create on the server, then put the returned record at the head
    pub async fn create(&self, draft: &R::Draft) -> PortalResult<R> {
        self.handle.settle_load().await;

        match self.api.create(draft).await {
            Ok(created) => {
                let head = created.clone();
                self.handle.apply(move |items| {
                    items.retain(|item| item.id() != head.id());
                    items.insert(0, head);
                });
                Ok(created)
            }
            Err(e) => {
                self.handle.record_failure("create", &e);
                Err(e)
            }
        }
    }

    /// Update on the server, then replace the cached record in place
    pub async fn update(&self, id: &RecordId<R>, draft: &R::Draft) -> PortalResult<R> {
        let _guard = self.handle.begin_write(id, "update")?;
        self.handle.settle_load().await;

        match self.api.update(id, draft).await {
            Ok(updated) => {
                let replacement = updated.clone();
                self.handle.apply(move |items| {
                    if let Some(slot) = items.iter_mut().find(|item| item.id() == id) {
                        *slot = replacement;
                    }
                });
                Ok(updated)
            }
            Err(e) => {
                self.handle.record_failure("update", &e);
                Err(e)
            }
        }
    }

    /// Delete on the server, then drop the record from the cache
    pub async fn remove(&self, id: &RecordId<R>) -> PortalResult<()> {
        let _guard = self.handle.begin_write(id, "remove")?;
        self.handle.settle_load().await;

        match self.api.remove(id).await {
            Ok(()) => {
                self.handle.apply(|items| items.retain(|item| item.id() != id));
                Ok(())
            }
            Err(e) => {
                self.handle.record_failure("remove", &e);
                Err(e)
            }
        }
    }
}

impl<A> ResourceCollection<Scheme, A>
where
    A: ListSource<Item = Scheme> + RecordWriter<Item = Scheme> + SchemeApplicant + Sync + 'static,
{
    /// Validate the form, then submit it; the cached schemes are not touched
    pub async fn apply_for_scheme(
        &self,
        id: &SchemeId,
        application: &SchemeApplication,
    ) -> PortalResult<Value> {
        if let Err(message) = application.validate() {
            let err = PortalError::Invalid(message);
            err.log(Scheme::COLLECTION, "apply");
            return Err(err);
        }

        self.api
            .apply_for_scheme(id, application)
            .await
            .inspect_err(|e| e.log(Scheme::COLLECTION, "apply"))
    }
}

impl<R: Editable, A> Deref for ResourceCollection<R, A> {
    type Target = CollectionHandle<R>;

    fn deref(&self) -> &Self::Target {
        &self.handle
    }
}
