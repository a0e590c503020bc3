//! Action Flows
//!
//! Multi-step remote operations behind the add, update and delete buttons.
//! None of them is transactional: an uploaded photo whose row insert fails
//! stays in the bucket, a failed upload on add still saves the row without a
//! photo, and companion asset removals are best-effort.

use log::{info, warn};

use crate::domain::{Item, ItemForm, ItemPatch, Photo};
use crate::error::{ClosetError, ClosetResult};
use crate::store::RemoteStore;

pub async fn fetch_all<S: RemoteStore + ?Sized>(store: &S) -> ClosetResult<Vec<Item>> {
    store.list().await
}

async fn upload<S: RemoteStore + ?Sized>(store: &S, photo: &Photo) -> ClosetResult<String> {
    let path = store.upload_asset(&photo.unique_path(), photo).await?;
    info!("uploaded {} as {}", photo.file_name, path);
    Ok(path)
}

async fn remove_asset_best_effort<S: RemoteStore + ?Sized>(store: &S, path: &str) {
    if let Err(err) = store.delete_asset(path).await {
        warn!("could not remove asset {}: {}", path, err);
    }
}

/// A created row, plus the upload failure when its photo could not be stored
#[derive(Debug)]
pub struct Added {
    pub item: Item,
    pub upload_error: Option<ClosetError>,
}

/// Validate the form, upload the photo if any, then insert the row.
///
/// A failed upload does not stop the insert; the row is saved without a
/// photo and the upload error is handed back with it.
pub async fn add_item<S: RemoteStore + ?Sized>(
    store: &S,
    form: &ItemForm,
    photo: Option<&Photo>,
) -> ClosetResult<Added> {
    let mut draft = form.to_draft()?;
    let mut upload_error = None;
    if let Some(photo) = photo {
        match upload(store, photo).await {
            Ok(path) => draft.image_path = Some(path),
            Err(err) => {
                warn!("upload of {} failed, saving {} without a photo: {}", photo.file_name, draft.name, err);
                upload_error = Some(err);
            }
        }
    }

    let item = store.insert(&draft).await.inspect_err(|_| {
        if let Some(path) = &draft.image_path {
            warn!("insert failed, asset {} left in the bucket", path);
        }
    })?;
    Ok(Added { item, upload_error })
}

/// Send the changed fields of `current`; returns the patch that was applied.
///
/// A new photo replaces the old one; `form.remove_photo` clears it. The
/// replaced asset is removed only after the row update succeeded.
pub async fn update_item<S: RemoteStore + ?Sized>(
    store: &S,
    current: &Item,
    form: &ItemForm,
    photo: Option<&Photo>,
) -> ClosetResult<ItemPatch> {
    let mut patch = form.to_patch(current)?;
    if let Some(photo) = photo {
        patch.image_path = Some(Some(upload(store, photo).await?));
    } else if form.remove_photo && current.has_photo() {
        patch.image_path = Some(None);
    }

    if patch.is_empty() {
        return Ok(patch);
    }

    if let Err(err) = store.update(&current.id, &patch).await {
        if let Some(Some(path)) = &patch.image_path {
            warn!("update failed, asset {} left in the bucket", path);
        }
        return Err(err);
    }

    if let (Some(_), Some(old)) = (&patch.image_path, &current.image_path) {
        remove_asset_best_effort(store, old).await;
    }
    Ok(patch)
}

/// Delete the row, then its photo
pub async fn delete_item<S: RemoteStore + ?Sized>(store: &S, item: &Item) -> ClosetResult<()> {
    store.delete(&item.id).await?;
    info!("deleted item {}", item.id);
    if let Some(path) = &item.image_path {
        remove_asset_best_effort(store, path).await;
    }
    Ok(())
}
