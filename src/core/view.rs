//! Pure view derivation over the catalog.
//!
//! Given the dataset, the status map, and the current query, [`derive_view`]
//! produces the visible item list and the aggregate counts. It is a pure
//! function of its inputs: no hidden state, no side effects, and identical
//! inputs always yield an identical result.

use serde::Serialize;

use crate::core::item::Item;
use crate::core::status::{Status, StatusMap};

/// The ephemeral, UI-driven query state.
///
/// Not persisted; a fresh session starts with an empty query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against item name and category.
    /// Empty matches everything.
    pub search: String,
    /// When set, only items whose effective status equals this pass.
    pub filter: Option<Status>,
}

impl ViewQuery {
    /// Check whether an item with the given effective status passes the query.
    pub fn matches(&self, item: &Item, status: Status) -> bool {
        let matches_search = if self.search.is_empty() {
            true
        } else {
            let needle = self.search.to_lowercase();
            item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        };

        let matches_filter = match self.filter {
            Some(wanted) => status == wanted,
            None => true,
        };

        matches_search && matches_filter
    }
}

/// The recomputed view: visible items plus aggregate counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    /// Items passing the query, sorted ascending by name.
    pub visible: Vec<Item>,
    /// Count of `Learned` entries over the full status map, independent of
    /// any search or filter.
    pub learned: usize,
    /// Full dataset size, independent of filtering.
    pub total: usize,
}

/// Derive the visible item list and counts from the four inputs.
///
/// Filtering applies [`ViewQuery::matches`] with each item's effective
/// status. The result is sorted ascending by case-folded name; the sort is
/// stable, so name ties keep their dataset input order.
pub fn derive_view(items: &[Item], statuses: &StatusMap, query: &ViewQuery) -> DerivedView {
    let mut visible: Vec<Item> = items
        .iter()
        .filter(|item| query.matches(item, statuses.effective(&item.id)))
        .cloned()
        .collect();

    visible.sort_by_cached_key(|item| item.name.to_lowercase());

    DerivedView {
        visible,
        learned: statuses.learned_count(),
        total: items.len(),
    }
}
