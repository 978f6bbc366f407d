//! The tracker: single source of truth for status mutations.
//!
//! Every user intent (tile click, explicit status button, search box,
//! filter select) arrives here as a plain method call. Mutations write the
//! in-memory map and persist through the status store before the next view
//! derivation, so a change is always visible to the recomputation that
//! follows it. Persistence failures are swallowed; the in-memory map stays
//! authoritative for the session.

use crate::core::item::Dataset;
use crate::core::status::{Status, StatusMap};
use crate::core::view::{derive_view, DerivedView, ViewQuery};
use crate::error::FailOpen;
use crate::storage::StatusStore;

/// Catalog browser state: dataset, statuses, store, and the current query.
#[derive(Debug)]
pub struct Tracker<S: StatusStore> {
    dataset: Dataset,
    statuses: StatusMap,
    store: S,
    query: ViewQuery,
}

impl<S: StatusStore> Tracker<S> {
    /// Create a tracker over a dataset, loading persisted statuses.
    ///
    /// Loading is fail-open: a missing, corrupt, or unreadable status
    /// record starts the session with an empty map. The store applies
    /// legacy-value migration before the map is seen here.
    pub fn new(dataset: Dataset, store: S) -> Self {
        let statuses = store.load().fail_open_default("loading statuses");
        Self {
            dataset,
            statuses,
            store,
            query: ViewQuery::default(),
        }
    }

    /// Advance a blueprint to the next status in the cycle and persist.
    ///
    /// Total and unconditional: the current status (defaulting to
    /// `Unknown`) always advances, and `Learned` wraps back to `Unknown`.
    /// Returns the new status.
    pub fn cycle(&mut self, id: &str) -> Status {
        let next = self.statuses.effective(id).cycle();
        self.statuses.set(id, next);
        self.persist();
        next
    }

    /// Overwrite a blueprint's status regardless of its current value,
    /// then persist.
    ///
    /// Ids absent from the dataset are accepted and carried in the map
    /// unused.
    pub fn set_status(&mut self, id: &str, next: Status) {
        self.statuses.set(id, next);
        self.persist();
    }

    /// Replace the search text.
    pub fn update_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    /// Replace the status filter.
    pub fn update_filter(&mut self, filter: Option<Status>) {
        self.query.filter = filter;
    }

    /// Derive the current view from the dataset, statuses, and query.
    pub fn view(&self) -> DerivedView {
        derive_view(self.dataset.items(), &self.statuses, &self.query)
    }

    /// The effective status for a blueprint id.
    pub fn status_of(&self, id: &str) -> Status {
        self.statuses.effective(id)
    }

    /// Count of `Learned` entries over the full map.
    pub fn learned_count(&self) -> usize {
        self.statuses.learned_count()
    }

    /// Full dataset size.
    pub fn total(&self) -> usize {
        self.dataset.len()
    }

    /// The catalog this tracker browses.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The authoritative status map.
    pub fn statuses(&self) -> &StatusMap {
        &self.statuses
    }

    fn persist(&self) {
        self.store
            .save(&self.statuses)
            .fail_open_default("persisting statuses");
    }
}
