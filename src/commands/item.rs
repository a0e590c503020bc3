//! Item Commands
//!
//! Load, submit and delete flows. Store guards are never held across an await.

use leptos::prelude::*;

use closet_core::{actions, AfterDelete, ClosetError, ItemId, Photo};

use crate::context::AppContext;
use crate::store::{AppStore, AppStateStoreFields};

/// Replace the item list with a fresh fetch
pub async fn load_items(ctx: &AppContext, store: AppStore) {
    store.closet().write().begin_load();
    let result = actions::fetch_all(ctx.remote()).await;
    store.closet().write().finish_load(result);
}

/// Submit the add/edit form. Returns true when the item was saved.
pub async fn submit_form(ctx: &AppContext, store: AppStore, photo: Option<Photo>) -> bool {
    let form = store.closet().read_untracked().form.clone();

    let Some(id) = form.editing.clone() else {
        let result = actions::add_item(ctx.remote(), &form, photo.as_ref()).await;
        return store.closet().write().finish_add(result);
    };

    let current = store.closet().read_untracked().find(&id).cloned();
    let Some(current) = current else {
        let closet_field = store.closet();
        let mut closet = closet_field.write();
        closet.set_error(ClosetError::NotFound(format!("item {}", id)));
        closet.form.reset();
        return false;
    };

    let result = actions::update_item(ctx.remote(), &current, &form, photo.as_ref()).await;
    store.closet().write().finish_update(&id, result)
}

pub async fn delete_item(ctx: &AppContext, store: AppStore, id: ItemId) {
    let item = store.closet().read_untracked().find(&id).cloned();
    let Some(item) = item else {
        log::warn!("delete requested for unknown item {}", id);
        return;
    };

    store.closet().write().begin_delete(&id);
    let result = actions::delete_item(ctx.remote(), &item).await;
    let next = store.closet().write().finish_delete(&id, result);
    if next == AfterDelete::Resync {
        ctx.reload();
    }
}
