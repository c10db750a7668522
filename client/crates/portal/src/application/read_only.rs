//! Read-only Collection
//!
//! Fetch-on-mount list with no writes, e.g. a student's own applications.

use std::ops::Deref;
use std::sync::Arc;

use crate::application::handle::CollectionHandle;
use crate::domain::repository::{ListSource, Record};

pub struct ReadOnlyCollection<R: Record> {
    handle: CollectionHandle<R>,
}

impl<R: Record> ReadOnlyCollection<R> {
    pub fn mount<A>(api: A) -> Self
    where
        A: ListSource<Item = R> + Sync + 'static,
    {
        Self {
            handle: CollectionHandle::mount(Arc::new(api)),
        }
    }
}

impl<R: Record> Deref for ReadOnlyCollection<R> {
    type Target = CollectionHandle<R>;

    fn deref(&self) -> &Self::Target {
        &self.handle
    }
}
