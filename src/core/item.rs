//! Blueprint catalog types.
//!
//! The catalog is an ordered, immutable list of blueprints supplied as a
//! JSON array at startup. It is never mutated during a session; all
//! user-visible state lives in the status map.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::util::read_to_string_limited;

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Crafting bench category.
    pub category: String,
    /// Rarity tier, when the source data has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
}

impl Item {
    /// Create an item without a rarity tier.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            rarity: None,
        }
    }

    /// Attach a rarity tier.
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }
}

/// The immutable, ordered blueprint catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    items: Vec<Item>,
}

impl Dataset {
    /// Build a dataset from an in-memory item list, preserving order.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load a dataset from a JSON array file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_to_string_limited(path)?;
        let items: Vec<Item> = serde_json::from_str(&content).map_err(|e| {
            TrackerError::dataset(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Self { items })
    }

    /// The items in their original input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_item_new() {
        let item = Item::new("ferro-rifle", "Ferro Rifle", "Weapons");

        assert_eq!(item.id, "ferro-rifle");
        assert_eq!(item.name, "Ferro Rifle");
        assert_eq!(item.category, "Weapons");
        assert!(item.rarity.is_none());
    }

    #[test]
    fn test_item_with_rarity() {
        let item = Item::new("ferro-rifle", "Ferro Rifle", "Weapons").with_rarity("Epic");
        assert_eq!(item.rarity, Some("Epic".to_string()));
    }

    #[test]
    fn test_item_deserialize_without_rarity() {
        let item: Item =
            serde_json::from_str(r#"{"id":"a","name":"Alpha","category":"Gear"}"#).unwrap();

        assert_eq!(item.id, "a");
        assert!(item.rarity.is_none());
    }

    #[test]
    fn test_item_serialize_skips_missing_rarity() {
        let json = serde_json::to_string(&Item::new("a", "Alpha", "Gear")).unwrap();
        assert!(!json.contains("rarity"));
    }

    #[test]
    fn test_dataset_preserves_order() {
        let dataset = Dataset::from_items(vec![
            Item::new("z", "Zeta", "Gear"),
            Item::new("a", "Alpha", "Gear"),
        ]);

        assert_eq!(dataset.items()[0].id, "z");
        assert_eq!(dataset.items()[1].id, "a");
    }

    #[test]
    fn test_dataset_get() {
        let dataset = Dataset::from_items(vec![Item::new("a", "Alpha", "Gear")]);

        assert!(dataset.get("a").is_some());
        assert!(dataset.get("missing").is_none());
    }

    #[test]
    fn test_dataset_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blueprints.json");
        fs::write(
            &path,
            r#"[
                {"id":"a","name":"Alpha","category":"Gear","rarity":"Rare"},
                {"id":"b","name":"Beta","category":"Weapons"}
            ]"#,
        )
        .unwrap();

        let dataset = Dataset::load(&path).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.items()[0].rarity, Some("Rare".to_string()));
        assert!(dataset.items()[1].rarity.is_none());
    }

    #[test]
    fn test_dataset_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Dataset::load(&temp.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_dataset_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{not a list}").unwrap();

        let result = Dataset::load(&path);
        assert!(matches!(result, Err(TrackerError::Dataset { .. })));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }
}
