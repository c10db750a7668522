//! Collection Handle
//!
//! Shared core of every collection: the cached list in a `watch` channel,
//! the mount task and the per-record write guard.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::application::in_flight::{InFlight, InFlightGuard};
use crate::domain::repository::{ListSource, Record, RecordId};
use crate::error::{PortalError, PortalResult};

/// Cached view of one collection
#[derive(Debug, Clone)]
pub struct CollectionState<R> {
    /// Server insertion order; successful creates go to the head
    pub items: Vec<R>,
    /// True until the initial fetch settles
    pub loading: bool,
    /// Last failure of the fetch or of a write
    pub error: Option<PortalError>,
}

impl<R> CollectionState<R> {
    fn mounting() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl<R: Record> CollectionState<R> {
    pub fn find(&self, id: &RecordId<R>) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }
}

struct Cache<R> {
    state: watch::Sender<CollectionState<R>>,
    in_flight: InFlight,
}

impl<R: Record> Cache<R> {
    fn finish_load(&self, result: PortalResult<Vec<R>>) {
        match result {
            Ok(items) => {
                tracing::debug!(collection = R::COLLECTION, count = items.len(), "Collection ready");
                self.state.send_modify(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                });
            }
            Err(e) => {
                e.log(R::COLLECTION, "list");
                self.state.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(e);
                });
            }
        }
    }
}

/// Mounted collection
///
/// Dropping the handle unmounts it: the initial fetch is cancelled and a
/// result that still arrives is discarded.
pub struct CollectionHandle<R: Record> {
    cache: Arc<Cache<R>>,
    mount: JoinHandle<()>,
}

impl<R: Record> CollectionHandle<R> {
    /// Start the initial fetch on the current tokio runtime
    ///
    /// Returns immediately with `loading = true`.
    pub fn mount<A>(api: Arc<A>) -> Self
    where
        A: ListSource<Item = R> + Sync + 'static,
    {
        let cache = Arc::new(Cache {
            state: watch::Sender::new(CollectionState::mounting()),
            in_flight: InFlight::default(),
        });
        let weak = Arc::downgrade(&cache);

        let mount = tokio::spawn(async move {
            let result = api.list().await;
            match weak.upgrade() {
                Some(cache) => cache.finish_load(result),
                None => {
                    tracing::debug!(collection = R::COLLECTION, "Fetch finished after unmount");
                }
            }
        });

        Self { cache, mount }
    }

    pub fn state(&self) -> CollectionState<R> {
        self.cache.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<R> {
        self.cache.state.borrow().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.cache.state.borrow().loading
    }

    pub fn error(&self) -> Option<PortalError> {
        self.cache.state.borrow().error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CollectionState<R>> {
        self.cache.state.subscribe()
    }

    /// Wait for the initial fetch to settle, successfully or not
    pub async fn wait_ready(&self) -> CollectionState<R> {
        self.settle_load().await;
        self.state()
    }

    /// Resolve once `loading` is false
    ///
    /// Writes call this before reaching the server so the fetched list
    /// cannot overwrite a change confirmed while it was in flight.
    pub(crate) async fn settle_load(&self) {
        let mut receiver = self.subscribe();
        // The sender lives in `self`, so the wait cannot fail.
        let _ = receiver.wait_for(|s| !s.loading).await;
    }

    /// True while a write to `id` is in flight
    pub fn is_writing(&self, id: &RecordId<R>) -> bool {
        self.cache.in_flight.is_busy(id.as_str())
    }

    /// Reserve `id` for one write
    pub(crate) fn begin_write(
        &self,
        id: &RecordId<R>,
        operation: &'static str,
    ) -> PortalResult<InFlightGuard<'_>> {
        self.cache.in_flight.try_begin(id.as_str()).ok_or_else(|| {
            let err = PortalError::WriteInFlight {
                collection: R::COLLECTION,
                id: id.to_string(),
            };
            err.log(R::COLLECTION, operation);
            err
        })
    }

    /// Apply a confirmed change to the cached list
    pub(crate) fn apply(&self, change: impl FnOnce(&mut Vec<R>)) {
        self.cache.state.send_modify(|s| change(&mut s.items));
    }

    /// Record a failed server call; the list is left as it was
    pub(crate) fn record_failure(&self, operation: &'static str, err: &PortalError) {
        err.log(R::COLLECTION, operation);
        let err = err.clone();
        self.cache.state.send_modify(|s| s.error = Some(err));
    }
}

impl<R: Record> Drop for CollectionHandle<R> {
    fn drop(&mut self) {
        self.mount.abort();
    }
}
