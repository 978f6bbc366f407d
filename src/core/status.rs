//! Per-blueprint acquisition status and the persisted status map.
//!
//! A blueprint is in exactly one of three states: `Unknown` (never seen),
//! `Need` (wanted but not learned), or `Learned`. Clicking a tile cycles
//! through them in that order; explicit controls can jump to any state.
//!
//! Earlier releases persisted two additional values, `"got"` and
//! `"crafted"`. Both fold into `Learned` when a saved map is loaded.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Acquisition status for a single blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not recorded. The implicit default for any blueprint without an entry.
    #[default]
    Unknown,
    /// Wanted but not yet learned.
    Need,
    /// Learned.
    Learned,
}

impl Status {
    /// Advance to the next status in the fixed cycle order.
    ///
    /// The cycle is total: `Unknown -> Need -> Learned -> Unknown`.
    /// There is no terminal state.
    pub fn cycle(self) -> Self {
        match self {
            Status::Unknown => Status::Need,
            Status::Need => Status::Learned,
            Status::Learned => Status::Unknown,
        }
    }

    /// The canonical wire name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unknown => "unknown",
            Status::Need => "need",
            Status::Learned => "learned",
        }
    }

    /// Interpret a stored status string, accepting every historical encoding.
    ///
    /// The legacy values `"got"` and `"crafted"` map to `Learned`. Anything
    /// unrecognized maps to `Unknown` rather than being carried forward.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "unknown" => Status::Unknown,
            "need" => Status::Need,
            "learned" | "got" | "crafted" => Status::Learned,
            _ => Status::Unknown,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authoritative mapping from blueprint id to status.
///
/// Keys are unique and unordered. Entries whose ids no longer appear in the
/// dataset are tolerated and carried, but never surface in the view. All
/// reads go through [`StatusMap::effective`], which applies the `Unknown`
/// default for missing entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatusMap {
    entries: HashMap<String, Status>,
}

impl StatusMap {
    /// Create an empty status map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a status map from raw stored strings, migrating legacy values.
    ///
    /// Returns the migrated map and whether any entry was rewritten
    /// (a legacy or unrecognized value). Callers re-save when `true` so the
    /// persisted form never retains retired encodings.
    ///
    /// Migration is idempotent: feeding the canonical form back through
    /// produces an identical map and reports no rewrite.
    pub fn from_raw(raw: &HashMap<String, String>) -> (Self, bool) {
        let mut entries = HashMap::with_capacity(raw.len());
        let mut migrated = false;

        for (id, value) in raw {
            let status = Status::from_stored(value);
            if status.as_str() != value {
                migrated = true;
            }
            entries.insert(id.clone(), status);
        }

        (Self { entries }, migrated)
    }

    /// The effective status for a blueprint id.
    ///
    /// Missing entries resolve to `Unknown`. This is the single defaulting
    /// point; call sites never apply the default inline.
    pub fn effective(&self, id: &str) -> Status {
        self.entries.get(id).copied().unwrap_or_default()
    }

    /// Record a status for a blueprint id, overwriting any previous value.
    pub fn set(&mut self, id: impl Into<String>, status: Status) {
        self.entries.insert(id.into(), status);
    }

    /// Count of entries recorded as `Learned`, over the full map.
    ///
    /// Never scoped by search or filter; an entry whose id has dropped out
    /// of the dataset still counts.
    pub fn learned_count(&self) -> usize {
        self.entries
            .values()
            .filter(|s| **s == Status::Learned)
            .count()
    }

    /// Count of entries recorded with the given status.
    pub fn count_of(&self, status: Status) -> usize {
        self.entries.values().filter(|s| **s == status).count()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Status)> {
        self.entries.iter()
    }
}
