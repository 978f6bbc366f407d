//! In-memory status storage for testing.
//!
//! Thread-safe implementation using `RwLock<StatusMap>`. The record is
//! lost when the store is dropped, which is exactly the degraded behavior
//! a session falls back to when real storage is unavailable.

use std::sync::RwLock;

use crate::core::StatusMap;
use crate::error::Result;
use crate::storage::StatusStore;

/// In-memory status store for testing.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    statuses: RwLock<StatusMap>,
}

impl MemoryStatusStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            statuses: RwLock::new(StatusMap::new()),
        }
    }

    /// Clear the stored record.
    pub fn clear(&self) {
        *self.statuses.write().unwrap() = StatusMap::new();
    }
}

impl StatusStore for MemoryStatusStore {
    fn load(&self) -> Result<StatusMap> {
        Ok(self.statuses.read().unwrap().clone())
    }

    fn save(&self, map: &StatusMap) -> Result<()> {
        *self.statuses.write().unwrap() = map.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::storage::traits::tests::test_status_store_roundtrip;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStatusStore::new();
        test_status_store_roundtrip(&store);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStatusStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStatusStore::new();

        let mut map = StatusMap::new();
        map.set("rifle", Status::Learned);
        store.save(&map).unwrap();
        assert!(!store.load().unwrap().is_empty());

        store.clear();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_default_trait() {
        let store = MemoryStatusStore::default();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_returns_copy() {
        let store = MemoryStatusStore::new();

        let mut map = StatusMap::new();
        map.set("rifle", Status::Need);
        store.save(&map).unwrap();

        let mut loaded = store.load().unwrap();
        loaded.set("rifle", Status::Learned);

        // Mutating the copy does not touch the stored record
        assert_eq!(store.load().unwrap().effective("rifle"), Status::Need);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryStatusStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store_clone = Arc::clone(&store);
            let handle = thread::spawn(move || {
                let mut map = store_clone.load().unwrap();
                map.set(format!("bp-{}", i), Status::Learned);
                store_clone.save(&map).unwrap();
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // Last writer wins per save; the record is still a valid map
        assert!(!store.load().unwrap().is_empty());
    }
}
