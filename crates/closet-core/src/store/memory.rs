//! In-Memory Store
//!
//! Process-local stand-in for the hosted backend. Assigns ids and timestamps
//! the way the server does and can be told to fail a given operation.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::traits::RemoteStore;
use crate::domain::{Item, ItemDraft, ItemId, ItemPatch, Photo};
use crate::error::{ClosetError, ClosetResult};
use crate::visible::compare_created;

/// Store operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    List,
    Insert,
    Update,
    Delete,
    UploadAsset,
    DeleteAsset,
}

#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    assets: HashMap<String, Photo>,
    failing: HashSet<StoreOp>,
    last_created: Option<DateTime<Utc>>,
}

impl Inner {
    fn check(&self, op: StoreOp) -> ClosetResult<()> {
        if self.failing.contains(&op) {
            return Err(ClosetError::Api {
                status: 503,
                message: format!("{:?} unavailable", op),
            });
        }
        Ok(())
    }

    /// Strictly increasing creation time, even within one clock tick
    fn next_created(&mut self) -> String {
        let mut now = Utc::now();
        if let Some(last) = self.last_created {
            if now <= last {
                now = last + Duration::microseconds(1);
            }
        }
        self.last_created = Some(now);
        now.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

pub struct InMemoryStore {
    bucket: String,
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Start with existing rows (kept as given)
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            bucket: "images".to_string(),
            inner: Mutex::new(Inner {
                items,
                ..Default::default()
            }),
        }
    }

    /// Make every later call of `op` fail until `recover` is called
    pub async fn fail_on(&self, op: StoreOp) {
        self.inner.lock().await.failing.insert(op);
    }

    pub async fn recover(&self, op: StoreOp) {
        self.inner.lock().await.failing.remove(&op);
    }

    pub async fn has_asset(&self, path: &str) -> bool {
        self.inner.lock().await.assets.contains_key(path)
    }

    pub async fn asset_count(&self) -> usize {
        self.inner.lock().await.assets.len()
    }

    pub async fn row_count(&self) -> usize {
        self.inner.lock().await.items.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RemoteStore for InMemoryStore {
    async fn list(&self) -> ClosetResult<Vec<Item>> {
        let inner = self.inner.lock().await;
        inner.check(StoreOp::List)?;
        let mut items = inner.items.clone();
        items.sort_by(|a, b| compare_created(&b.created_at, &a.created_at));
        Ok(items)
    }

    async fn insert(&self, draft: &ItemDraft) -> ClosetResult<Item> {
        let mut inner = self.inner.lock().await;
        inner.check(StoreOp::Insert)?;
        let item = Item {
            id: ItemId::new(Uuid::new_v4().to_string()),
            name: draft.name.clone(),
            category: draft.category.clone(),
            color: draft.color.clone(),
            size: draft.size.clone(),
            image_path: draft.image_path.clone(),
            created_at: inner.next_created(),
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> ClosetResult<()> {
        let mut inner = self.inner.lock().await;
        inner.check(StoreOp::Update)?;
        if let Some(item) = inner.items.iter_mut().find(|i| &i.id == id) {
            item.apply(patch);
        }
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> ClosetResult<()> {
        let mut inner = self.inner.lock().await;
        inner.check(StoreOp::Delete)?;
        inner.items.retain(|i| &i.id != id);
        Ok(())
    }

    async fn upload_asset(&self, path: &str, photo: &Photo) -> ClosetResult<String> {
        let mut inner = self.inner.lock().await;
        inner.check(StoreOp::UploadAsset)?;
        if inner.assets.contains_key(path) {
            return Err(ClosetError::Api {
                status: 409,
                message: format!("asset {} already exists", path),
            });
        }
        inner.assets.insert(path.to_string(), photo.clone());
        Ok(path.to_string())
    }

    async fn delete_asset(&self, path: &str) -> ClosetResult<()> {
        let mut inner = self.inner.lock().await;
        inner.check(StoreOp::DeleteAsset)?;
        inner.assets.remove(path);
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("memory://{}/{}", self.bucket, path)
    }
}
