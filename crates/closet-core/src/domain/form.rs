//! Item Form
//!
//! State behind the add/edit form. Validation happens here so a blank
//! name never reaches the store.

use super::item::{Item, ItemDraft, ItemId, ItemPatch, CATEGORIES, COLORS};
use crate::error::{ClosetError, ClosetResult};

const DEFAULT_SIZE: &str = "M";

#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    /// Whether the collapsible form is shown
    pub open: bool,
    /// Item being edited (None = adding)
    pub editing: Option<ItemId>,
    pub name: String,
    pub category: String,
    pub color: String,
    pub size: String,
    /// Clear the current photo on update (ignored when a new photo is chosen)
    pub remove_photo: bool,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            name: String::new(),
            category: CATEGORIES[0].to_string(),
            color: COLORS[0].to_string(),
            size: DEFAULT_SIZE.to_string(),
            remove_photo: false,
        }
    }
}

impl ItemForm {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle_open(&mut self) {
        if self.open {
            self.reset();
        } else {
            self.open = true;
        }
    }

    /// Back to defaults, closed
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Open the form pre-filled with an existing item
    pub fn start_edit(&mut self, item: &Item) {
        *self = Self {
            open: true,
            editing: Some(item.id.clone()),
            name: item.name.clone(),
            category: item.category.clone(),
            color: item.color.clone(),
            size: item.size.clone(),
            remove_photo: false,
        };
    }

    fn validated_name(&self) -> ClosetResult<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClosetError::invalid("name must not be blank"));
        }
        Ok(name.to_string())
    }

    /// Insert payload; the photo path is filled in by the add flow
    pub fn to_draft(&self) -> ClosetResult<ItemDraft> {
        Ok(ItemDraft {
            name: self.validated_name()?,
            category: self.category.clone(),
            color: self.color.clone(),
            size: self.size.clone(),
            image_path: None,
        })
    }

    /// Patch holding only the fields that differ from `current`
    pub fn to_patch(&self, current: &Item) -> ClosetResult<ItemPatch> {
        let name = self.validated_name()?;
        let changed = |new: &str, old: &str| (new != old).then(|| new.to_string());

        Ok(ItemPatch {
            name: changed(&name, &current.name),
            category: changed(&self.category, &current.category),
            color: changed(&self.color, &current.color),
            size: changed(&self.size, &current.size),
            image_path: None,
        })
    }
}
