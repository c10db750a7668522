//! Applications Collection
//!
//! Admin review list. The only write is a status decision, which on
//! success sets `status` on the cached entry and leaves its other fields
//! alone.

use std::ops::Deref;
use std::sync::Arc;

use kernel::id::ApplicationId;

use crate::application::handle::CollectionHandle;
use crate::domain::entities::Application;
use crate::domain::repository::{ListSource, StatusWriter};
use crate::domain::value_objects::ApplicationStatus;
use crate::error::PortalResult;

pub struct ApplicationsCollection<A> {
    handle: CollectionHandle<Application>,
    api: Arc<A>,
}

impl<A> ApplicationsCollection<A>
where
    A: ListSource<Item = Application> + StatusWriter + Sync + 'static,
{
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

    pub async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> PortalResult<()> {
        let _guard = self.handle.begin_write(id, "update_status")?;
        self.handle.settle_load().await;

        match self.api.update_status(id, status).await {
            Ok(()) => {
                self.handle.apply(|items| {
                    for app in items.iter_mut().filter(|app| &app.id == id) {
                        app.status = status;
                    }
                });
                Ok(())
            }
            Err(e) => {
                self.handle.record_failure("update_status", &e);
                Err(e)
            }
        }
    }
}

impl<A> Deref for ApplicationsCollection<A> {
    type Target = CollectionHandle<Application>;

    fn deref(&self) -> &Self::Target {
        &self.handle
    }
}
