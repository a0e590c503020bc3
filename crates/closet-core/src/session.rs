//! Closet Session
//!
//! Owns a store handle and the view model and runs each flow end to end,
//! folding every failure into the view model's error message.

use std::sync::Arc;

use crate::actions;
use crate::config::ClosetConfig;
use crate::domain::{DeleteMode, Item, ItemId, Photo};
use crate::error::ClosetError;
use crate::store::{RemoteStore, SupabaseStore};
use crate::view_model::{AfterDelete, Closet};

pub struct ClosetSession<S: RemoteStore> {
    store: Arc<S>,
    closet: Closet,
}

impl ClosetSession<SupabaseStore> {
    pub fn from_config(config: &ClosetConfig) -> Self {
        Self::new(Arc::new(SupabaseStore::new(&config.store)), config.delete_mode)
    }
}

impl<S: RemoteStore> ClosetSession<S> {
    pub fn new(store: Arc<S>, delete_mode: DeleteMode) -> Self {
        Self {
            store,
            closet: Closet::new(delete_mode),
        }
    }

    pub fn closet(&self) -> &Closet {
        &self.closet
    }

    pub fn closet_mut(&mut self) -> &mut Closet {
        &mut self.closet
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn public_url(&self, item: &Item) -> Option<String> {
        item.image_path.as_deref().map(|path| self.store.public_url(path))
    }

    /// Fetch the whole collection
    pub async fn refresh(&mut self) {
        self.closet.begin_load();
        let result = actions::fetch_all(&*self.store).await;
        self.closet.finish_load(result);
    }

    /// Add or update depending on the form. Returns whether it succeeded.
    pub async fn submit(&mut self, photo: Option<Photo>) -> bool {
        let Some(id) = self.closet.form.editing.clone() else {
            let result = actions::add_item(&*self.store, &self.closet.form, photo.as_ref()).await;
            return self.closet.finish_add(result);
        };

        let Some(current) = self.closet.find(&id).cloned() else {
            self.closet.set_error(ClosetError::NotFound(format!("item {}", id)));
            self.closet.form.reset();
            return false;
        };
        let result = actions::update_item(&*self.store, &current, &self.closet.form, photo.as_ref()).await;
        self.closet.finish_update(&id, result)
    }

    /// Delete an item known to the view model. Returns whether the store
    /// accepted the delete.
    pub async fn delete(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.closet.find(id).cloned() else {
            return false;
        };

        self.closet.begin_delete(id);
        let result = actions::delete_item(&*self.store, &item).await;
        let accepted = result.is_ok();
        if self.closet.finish_delete(id, result) == AfterDelete::Resync {
            self.refresh().await;
        }
        accepted
    }
}
