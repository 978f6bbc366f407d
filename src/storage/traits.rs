//! Status storage traits for bpdex.

use std::sync::Arc;

use crate::core::StatusMap;
use crate::error::Result;

/// Trait for status storage backends.
///
/// Implementations own the persisted form of the status map. `load` returns
/// a fully migrated map: legacy status encodings never escape the store.
pub trait StatusStore: Send + Sync {
    /// Load the persisted status map.
    ///
    /// A record that has never been written loads as an empty map.
    fn load(&self) -> Result<StatusMap>;

    /// Persist the status map, replacing the previous record.
    fn save(&self, map: &StatusMap) -> Result<()>;
}

/// Blanket implementation of StatusStore for Arc-wrapped stores.
///
/// This allows using `Arc<T>` where `T: StatusStore` is expected, which is
/// useful for sharing stores between tests and commands.
impl<T: StatusStore + ?Sized> StatusStore for Arc<T> {
    fn load(&self) -> Result<StatusMap> {
        (**self).load()
    }

    fn save(&self, map: &StatusMap) -> Result<()> {
        (**self).save(map)
    }
}
