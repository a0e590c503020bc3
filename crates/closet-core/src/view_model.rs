//! View Model
//!
//! Everything the page renders: the fetched collection, filter/sort state,
//! form state, a loading flag and one user-visible error message. Remote
//! calls happen elsewhere; results are applied here synchronously.

use std::collections::BTreeSet;
use std::fmt::Display;

use log::{error, info};

use crate::actions::Added;
use crate::domain::{
    DeleteMode, Facet, FilterState, Item, ItemForm, ItemId, ItemPatch, CATEGORIES, COLORS, SIZES,
};
use crate::error::ClosetResult;
use crate::visible::visible_items;

/// What the caller should do once a delete has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterDelete {
    Done,
    /// Fetch the full list again
    Resync,
}

fn category_field(item: &Item) -> &str {
    &item.category
}

fn color_field(item: &Item) -> &str {
    &item.color
}

fn size_field(item: &Item) -> &str {
    &item.size
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Closet {
    items: Vec<Item>,
    pub filter: FilterState,
    pub form: ItemForm,
    loading: bool,
    error: Option<String>,
    delete_mode: DeleteMode,
}

impl Closet {
    pub fn new(delete_mode: DeleteMode) -> Self {
        Self {
            delete_mode,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, err: impl Display) {
        let message = err.to_string();
        error!("{}", message);
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Filtered and sorted items, owned for rendering
    pub fn visible(&self) -> Vec<Item> {
        visible_items(&self.items, &self.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Values offered for a facet: the vocabulary first, then any other
    /// value present in the collection
    pub fn facet_values(&self, facet: Facet) -> Vec<String> {
        let (vocabulary, field): (&[&str], fn(&Item) -> &str) = match facet {
            Facet::Category => (CATEGORIES, category_field),
            Facet::Color => (COLORS, color_field),
            Facet::Size => (SIZES, size_field),
        };

        let mut values: Vec<String> = vocabulary.iter().map(|v| v.to_string()).collect();
        let extra: BTreeSet<&str> = self
            .items
            .iter()
            .map(field)
            .filter(|v| !v.trim().is_empty() && !vocabulary.contains(v))
            .collect();
        values.extend(extra.into_iter().map(str::to_string));
        values
    }

    // ========================
    // Load
    // ========================

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the collection; a failure leaves it empty
    pub fn finish_load(&mut self, result: ClosetResult<Vec<Item>>) {
        self.loading = false;
        match result {
            Ok(items) => {
                info!("loaded {} items", items.len());
                self.items = items;
            }
            Err(err) => {
                self.items.clear();
                self.set_error(err);
            }
        }
    }

    // ========================
    // Add / Update
    // ========================

    /// Prepend a created item and close the form. Returns whether the row was
    /// saved; a photo that failed to upload still leaves its message.
    pub fn finish_add(&mut self, result: ClosetResult<Added>) -> bool {
        match result {
            Ok(Added { item, upload_error }) => {
                info!("added item {}", item.id);
                self.items.retain(|i| i.id != item.id);
                self.items.insert(0, item);
                self.form.reset();
                match upload_error {
                    Some(err) => self.set_error(err),
                    None => self.error = None,
                }
                true
            }
            Err(err) => {
                self.set_error(err);
                false
            }
        }
    }

    /// Apply a confirmed patch in place and close the form
    pub fn finish_update(&mut self, id: &ItemId, result: ClosetResult<ItemPatch>) -> bool {
        match result {
            Ok(patch) => {
                if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
                    item.apply(&patch);
                }
                info!("updated item {}", id);
                self.form.reset();
                self.error = None;
                true
            }
            Err(err) => {
                self.set_error(err);
                false
            }
        }
    }

    // ========================
    // Delete
    // ========================

    /// Called before the remote delete; optimistic mode drops the item now
    pub fn begin_delete(&mut self, id: &ItemId) {
        if self.delete_mode == DeleteMode::Optimistic {
            self.remove(id);
        }
    }

    pub fn finish_delete(&mut self, id: &ItemId, result: ClosetResult<()>) -> AfterDelete {
        match (self.delete_mode, result) {
            (DeleteMode::Optimistic, Ok(())) => AfterDelete::Done,
            (DeleteMode::Optimistic, Err(err)) => {
                self.set_error(err);
                AfterDelete::Done
            }
            (DeleteMode::Confirmed, Ok(())) => {
                self.remove(id);
                AfterDelete::Resync
            }
            (DeleteMode::Confirmed, Err(err)) => {
                self.set_error(err);
                AfterDelete::Done
            }
        }
    }

    fn remove(&mut self, id: &ItemId) {
        self.items.retain(|item| &item.id != id);
        if self.form.editing.as_ref() == Some(id) {
            self.form.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClosetError;

    fn item(id: &str, name: &str, category: &str) -> Item {
        Item {
            id: ItemId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            color: "Mavi".to_string(),
            size: "M".to_string(),
            image_path: None,
            created_at: format!("2024-01-0{}T00:00:00Z", id),
        }
    }

    fn failure() -> ClosetError {
        ClosetError::Api {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_failed_load_leaves_list_empty() {
        let mut closet = Closet::default();
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı")]));
        assert_eq!(closet.len(), 1);

        closet.begin_load();
        assert!(closet.is_loading());
        closet.finish_load(Err(failure()));
        assert!(!closet.is_loading());
        assert!(closet.is_empty());
        assert_eq!(closet.error(), Some("Remote store error (500): boom"));
    }

    #[test]
    fn test_add_prepends_and_resets_form() {
        let mut closet = Closet::default();
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı")]));
        closet.form.toggle_open();
        closet.form.name = "Kaban".to_string();

        let added = Added {
            item: item("2", "Kaban", "Dış"),
            upload_error: None,
        };
        assert!(closet.finish_add(Ok(added)));
        assert_eq!(closet.items()[0].name, "Kaban");
        assert!(!closet.form.open);
        assert!(closet.form.name.is_empty());
        assert!(closet.error().is_none());
    }

    #[test]
    fn test_add_without_uploaded_photo_keeps_message() {
        let mut closet = Closet::default();
        closet.form.toggle_open();
        let added = Added {
            item: item("2", "Kaban", "Dış"),
            upload_error: Some(failure()),
        };
        assert!(closet.finish_add(Ok(added)));
        assert_eq!(closet.len(), 1);
        assert!(!closet.form.open);
        assert_eq!(closet.error(), Some("Remote store error (500): boom"));
    }

    #[test]
    fn test_deleting_edited_item_resets_form() {
        let mut closet = Closet::new(DeleteMode::Confirmed);
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı"), item("2", "Etek", "Alt")]));
        let editing = closet.items()[1].clone();
        closet.form.start_edit(&editing);
        assert!(closet.form.is_editing());

        closet.begin_delete(&editing.id);
        assert!(closet.form.is_editing());
        assert_eq!(closet.finish_delete(&editing.id, Ok(())), AfterDelete::Resync);
        assert_eq!(closet.form, ItemForm::default());
        assert_eq!(closet.len(), 1);
    }

    #[test]
    fn test_deleting_other_item_keeps_form() {
        let mut closet = Closet::new(DeleteMode::Confirmed);
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı"), item("2", "Etek", "Alt")]));
        let editing = closet.items()[1].clone();
        closet.form.start_edit(&editing);

        closet.finish_delete(&ItemId::new("1"), Ok(()));
        assert_eq!(closet.form.editing, Some(editing.id));
    }

    #[test]
    fn test_failed_add_keeps_form() {
        let mut closet = Closet::default();
        closet.form.toggle_open();
        closet.form.name = "Kaban".to_string();
        assert!(!closet.finish_add(Err(failure())));
        assert!(closet.form.open);
        assert_eq!(closet.form.name, "Kaban");
        assert!(closet.error().is_some());
    }

    #[test]
    fn test_update_applies_in_place() {
        let mut closet = Closet::default();
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı"), item("2", "Etek", "Alt")]));
        let patch = ItemPatch {
            name: Some("Uzun etek".to_string()),
            ..Default::default()
        };
        assert!(closet.finish_update(&ItemId::new("2"), Ok(patch)));
        assert_eq!(closet.items()[1].name, "Uzun etek");
        assert_eq!(closet.items()[1].id, ItemId::new("2"));
    }

    #[test]
    fn test_failed_update_untouched() {
        let mut closet = Closet::default();
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı")]));
        let before = closet.items().to_vec();
        assert!(!closet.finish_update(&ItemId::new("1"), Err(failure())));
        assert_eq!(closet.items(), &before[..]);
    }

    #[test]
    fn test_optimistic_delete_removes_even_on_failure() {
        let mut closet = Closet::new(DeleteMode::Optimistic);
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı")]));
        let id = ItemId::new("1");
        closet.begin_delete(&id);
        assert!(closet.is_empty());
        assert_eq!(closet.finish_delete(&id, Err(failure())), AfterDelete::Done);
        assert!(closet.is_empty());
        assert!(closet.error().is_some());
    }

    #[test]
    fn test_confirmed_delete_waits_for_store() {
        let mut closet = Closet::new(DeleteMode::Confirmed);
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı")]));
        let id = ItemId::new("1");

        closet.begin_delete(&id);
        assert_eq!(closet.len(), 1);
        assert_eq!(closet.finish_delete(&id, Err(failure())), AfterDelete::Done);
        assert_eq!(closet.len(), 1);

        closet.begin_delete(&id);
        assert_eq!(closet.finish_delete(&id, Ok(())), AfterDelete::Resync);
        assert!(closet.find(&id).is_none());
    }

    #[test]
    fn test_facet_values_include_unknown_categories() {
        let mut closet = Closet::default();
        closet.finish_load(Ok(vec![item("1", "Kemer", "Aksesuar"), item("2", "Bot", "Ayakkabı")]));
        let values = closet.facet_values(Facet::Category);
        assert_eq!(values, ["Üst", "Alt", "Dış", "Ayakkabı", "Aksesuar"]);
        assert_eq!(closet.facet_values(Facet::Size).len(), SIZES.len());
    }

    #[test]
    fn test_visible_respects_filter() {
        let mut closet = Closet::default();
        closet.finish_load(Ok(vec![item("1", "Bot", "Ayakkabı"), item("2", "Etek", "Alt")]));
        closet.filter.toggle(Facet::Category, "alt");
        let visible = closet.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Etek");
    }
}
