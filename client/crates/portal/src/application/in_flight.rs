//! Per-record write guard
//!
//! At most one write per record identifier at a time; a second one is
//! refused instead of racing the first.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub(crate) struct InFlight {
    ids: Mutex<HashSet<String>>,
}

/// Releases the identifier on drop
#[derive(Debug)]
pub(crate) struct InFlightGuard<'a> {
    owner: &'a InFlight,
    id: String,
}

impl InFlight {
    fn ids(&self) -> MutexGuard<'_, HashSet<String>> {
        self.ids.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// `None` if `id` already has a write in flight
    pub(crate) fn try_begin(&self, id: &str) -> Option<InFlightGuard<'_>> {
        if !self.ids().insert(id.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            owner: self,
            id: id.to_string(),
        })
    }

    pub(crate) fn is_busy(&self, id: &str) -> bool {
        self.ids().contains(id)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.owner.ids().remove(&self.id);
    }
}
