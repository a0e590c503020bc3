//! Remote Store - Core Trait
//!
//! Defines the contract of the hosted backend: one table of items and one
//! bucket of photos. Implementations can be a real backend, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{Item, ItemDraft, ItemId, ItemPatch, Photo};
use crate::error::ClosetResult;

/// Table and object-storage operations used by the closet.
///
/// Futures are `Send` on native targets; in the browser the HTTP client is
/// single-threaded so the bound is dropped there.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RemoteStore: Send + Sync {
    /// All items, newest first
    async fn list(&self) -> ClosetResult<Vec<Item>>;

    /// Insert a row; the store assigns id and creation timestamp
    async fn insert(&self, draft: &ItemDraft) -> ClosetResult<Item>;

    /// Partial update by id. Updating a missing row is not an error.
    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> ClosetResult<()>;

    /// Remove a row. Deleting a missing row is not an error.
    async fn delete(&self, id: &ItemId) -> ClosetResult<()>;

    /// Store a photo under a caller-generated path; returns the stored path
    async fn upload_asset(&self, path: &str, photo: &Photo) -> ClosetResult<String>;

    /// Remove a stored photo
    async fn delete_asset(&self, path: &str) -> ClosetResult<()>;

    /// Public URL for a stored photo (no request is made)
    fn public_url(&self, path: &str) -> String;
}
