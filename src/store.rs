//! Global Application State Store
//!
//! Uses Leptos reactive_stores so the closet view model is shared by every
//! component.

use leptos::prelude::*;
use reactive_stores::Store;

use closet_core::{Closet, DeleteMode, Facet, Item, SortMode};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, filter, form, loading flag and error message
    pub closet: Closet,
}

impl AppState {
    pub fn new(delete_mode: DeleteMode) -> Self {
        Self {
            closet: Closet::new(delete_mode),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the form pre-filled with an item's fields
pub fn store_start_edit(store: &AppStore, item: &Item) {
    let closet_field = store.closet();
    let mut closet = closet_field.write();
    closet.form.start_edit(item);
    closet.clear_error();
}

/// Toggle a facet value in the filter
pub fn store_toggle_facet(store: &AppStore, facet: Facet, value: &str) {
    store.closet().write().filter.toggle(facet, value);
}

/// Change the sort order from a select value
pub fn store_set_sort(store: &AppStore, value: &str) {
    store.closet().write().filter.set_sort(SortMode::from_str(value));
}

pub fn store_dismiss_error(store: &AppStore) {
    store.closet().write().clear_error();
}
