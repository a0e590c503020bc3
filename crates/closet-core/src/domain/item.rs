//! Item Entity
//!
//! One cataloged clothing entry, plus the insert and partial-update payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Category vocabulary offered by the form (first entry is the default)
pub const CATEGORIES: &[&str] = &["Üst", "Alt", "Dış", "Ayakkabı"];

/// Color vocabulary offered by the form (first entry is the default)
pub const COLORS: &[&str] = &["Mavi", "Kırmızı", "Sarı", "Turuncu", "Siyah", "Gri"];

/// Size vocabulary offered by the form
pub const SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

/// Opaque row identifier assigned by the store.
///
/// Accepts either a JSON string or integer so both uuid and bigint primary
/// keys work; always kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ItemId(s),
            RawId::Int(n) => ItemId(n.to_string()),
        })
    }
}

/// A stored clothing item (matches the `items` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub color: String,
    pub size: String,
    /// Object path inside the photo bucket
    #[serde(default)]
    pub image_path: Option<String>,
    /// ISO-8601 creation timestamp assigned by the store
    pub created_at: String,
}

impl Item {
    pub fn has_photo(&self) -> bool {
        self.image_path.is_some()
    }

    /// Card subtitle, e.g. "Üst, Mavi, M"
    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.category, self.color, self.size)
    }

    /// Apply a partial update in place. The id never changes.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(size) = &patch.size {
            self.size = size.clone();
        }
        if let Some(image_path) = &patch.image_path {
            self.image_path = image_path.clone();
        }
    }
}

/// Fields sent on insert; id and timestamp come back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub color: String,
    pub size: String,
    pub image_path: Option<String>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: CATEGORIES[0].to_string(),
            color: COLORS[0].to_string(),
            size: "M".to_string(),
            image_path: None,
        }
    }
}

/// Partial update. `None` leaves a column untouched; for `image_path`,
/// `Some(None)` clears the photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<Option<String>>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.color.is_none()
            && self.size.is_none()
            && self.image_path.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item {
            id: ItemId::new("1"),
            name: "Mavi gömlek".to_string(),
            category: "Üst".to_string(),
            color: "Mavi".to_string(),
            size: "M".to_string(),
            image_path: Some("old.jpg".to_string()),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_id_accepts_string_and_integer() {
        let from_text: ItemId = serde_json::from_str(r#""a1b2""#).unwrap();
        let from_int: ItemId = serde_json::from_str("42").unwrap();
        assert_eq!(from_text.as_str(), "a1b2");
        assert_eq!(from_int.as_str(), "42");
    }

    #[test]
    fn test_item_deserializes_table_row() {
        let json = r#"{"id":7,"name":"Kaban","category":"Dış","color":"Siyah","size":"L","image_path":null,"created_at":"2024-02-01T10:00:00+00:00"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::new("7"));
        assert!(!item.has_photo());
        assert_eq!(item.summary(), "Dış, Siyah, L");
    }

    #[test]
    fn test_apply_patch_keeps_id() {
        let mut item = sample();
        let patch = ItemPatch {
            name: Some("Lacivert gömlek".to_string()),
            image_path: Some(None),
            ..Default::default()
        };
        item.apply(&patch);
        assert_eq!(item.id, ItemId::new("1"));
        assert_eq!(item.name, "Lacivert gömlek");
        assert_eq!(item.color, "Mavi");
        assert!(item.image_path.is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = ItemPatch {
            size: Some("XL".to_string()),
            image_path: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"size": "XL", "image_path": null}));
        assert!(ItemPatch::default().is_empty());
    }
}
