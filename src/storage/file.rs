//! File-based status storage.
//!
//! The whole status map is one JSON record, stored under a fixed key as
//! `<home>/arcraiders_bp_v2_ui.json`. Atomic writes are achieved via temp
//! file + rename pattern.
//!
//! Reads are lenient: a missing or malformed record loads as an empty map,
//! and legacy status values are migrated (and re-saved) on load, so the
//! persisted form never retains retired encodings past the first session
//! that touches them.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::status_file_path;
use crate::core::StatusMap;
use crate::error::{FailOpen, Result, TrackerError};
use crate::storage::StatusStore;

/// The fixed key the status record is persisted under.
///
/// Records written under this key by earlier builds load as-is.
pub const STORAGE_KEY: &str = "arcraiders_bp_v2_ui";

/// Persisted wire shape: `{ "statuses": { "<id>": "<status>" } }`.
///
/// Values are read as raw strings so that legacy and unrecognized
/// encodings survive parsing and reach migration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StatusRecord {
    statuses: HashMap<String, String>,
}

#[derive(Serialize)]
struct StatusRecordOut<'a> {
    statuses: &'a StatusMap,
}

/// File-based status storage.
#[derive(Debug, Clone)]
pub struct FileStatusStore {
    /// Path of the status record file.
    path: PathBuf,
}

impl FileStatusStore {
    /// Create a file store at the default location.
    ///
    /// Uses `$BPDEX_HOME/arcraiders_bp_v2_ui.json` or
    /// `~/.bpdex/arcraiders_bp_v2_ui.json`.
    pub fn new() -> Result<Self> {
        let path = status_file_path().ok_or_else(|| {
            TrackerError::config("Could not determine status file path (no home directory)")
        })?;
        Self::with_path(path)
    }

    /// Create a file store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| TrackerError::storage(parent, e))?;
            }
        }

        Ok(Self { path })
    }

    /// Path of the status record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Write the record atomically using temp file + rename.
    fn atomic_write(&self, json: &str) -> Result<()> {
        let temp_path = self.temp_path();

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| TrackerError::storage(&temp_path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| TrackerError::storage(&temp_path, e))?;
            file.sync_all()
                .map_err(|e| TrackerError::storage(&temp_path, e))?;
        }

        // Rename temp file to final path (atomic on POSIX)
        fs::rename(&temp_path, &self.path).map_err(|e| TrackerError::storage(&self.path, e))?;

        Ok(())
    }
}

impl StatusStore for FileStatusStore {
    fn load(&self) -> Result<StatusMap> {
        if !self.path.exists() {
            return Ok(StatusMap::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| TrackerError::storage(&self.path, e))?;

        // Malformed JSON is treated identically to no data
        let record: StatusRecord = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    "malformed status record at {}: {} (treating as empty)",
                    self.path.display(),
                    e
                );
                StatusRecord::default()
            }
        };

        let (map, migrated) = StatusMap::from_raw(&record.statuses);

        // Rewrite the record so legacy values never persist past this load
        if migrated {
            self.save(&map)
                .fail_open_default("rewriting migrated statuses");
        }

        Ok(map)
    }

    fn save(&self, map: &StatusMap) -> Result<()> {
        let json = serde_json::to_string_pretty(&StatusRecordOut { statuses: map })?;
        self.atomic_write(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::storage::traits::tests::test_status_store_roundtrip;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStatusStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(format!("{}.json", STORAGE_KEY));
        let store = FileStatusStore::with_path(path).unwrap();
        (store, dir)
    }

    #[test]
    fn test_file_status_store_roundtrip() {
        let (store, _dir) = create_test_store();
        test_status_store_roundtrip(&store);
    }

    #[test]
    fn test_with_path_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("statuses.json");

        assert!(!path.parent().unwrap().exists());

        let _store = FileStatusStore::with_path(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (store, _dir) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_json_is_empty() {
        let (store, _dir) = create_test_store();
        fs::write(store.path(), "{not valid json").unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_statuses_key_is_empty() {
        let (store, _dir) = create_test_store();
        fs::write(store.path(), "{}").unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_migrates_legacy_values() {
        let (store, _dir) = create_test_store();
        fs::write(
            store.path(),
            r#"{"statuses":{"rifle":"got","scope":"crafted","stock":"need"}}"#,
        )
        .unwrap();

        let map = store.load().unwrap();

        assert_eq!(map.effective("rifle"), Status::Learned);
        assert_eq!(map.effective("scope"), Status::Learned);
        assert_eq!(map.effective("stock"), Status::Need);
    }

    #[test]
    fn test_migration_rewrites_persisted_form() {
        let (store, _dir) = create_test_store();
        fs::write(store.path(), r#"{"statuses":{"rifle":"got"}}"#).unwrap();

        store.load().unwrap();

        // The record on disk no longer contains the legacy value
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(!content.contains("got"));
        assert!(content.contains("learned"));

        // And a second load sees the canonical form directly
        let map = store.load().unwrap();
        assert_eq!(map.effective("rifle"), Status::Learned);
    }

    #[test]
    fn test_load_unrecognized_value_becomes_unknown() {
        let (store, _dir) = create_test_store();
        fs::write(store.path(), r#"{"statuses":{"rifle":"owned"}}"#).unwrap();

        let map = store.load().unwrap();
        assert_eq!(map.effective("rifle"), Status::Unknown);
    }

    #[test]
    fn test_save_wire_shape() {
        let (store, _dir) = create_test_store();

        let mut map = StatusMap::new();
        map.set("rifle", Status::Learned);
        store.save(&map).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["statuses"]["rifle"], "learned");
    }

    #[test]
    fn test_save_clean_load_does_not_rewrite() {
        let (store, _dir) = create_test_store();

        let mut map = StatusMap::new();
        map.set("rifle", Status::Need);
        store.save(&map).unwrap();

        let before = fs::metadata(store.path()).unwrap().modified().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(10));
        store.load().unwrap();
        let after = fs::metadata(store.path()).unwrap().modified().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_temp_file_cleaned_up() {
        let (store, _dir) = create_test_store();

        let mut map = StatusMap::new();
        map.set("rifle", Status::Need);
        store.save(&map).unwrap();

        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_atomic_write_produces_valid_json() {
        let (store, _dir) = create_test_store();

        let mut map = StatusMap::new();
        map.set("rifle", Status::Learned);
        map.set("scope", Status::Need);
        store.save(&map).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(parsed["statuses"].is_object());
    }
}
