//! Supabase Store
//!
//! Talks to the PostgREST table API and the Storage API of a hosted
//! Supabase project using the anonymous key.

use async_trait::async_trait;
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::traits::RemoteStore;
use crate::config::StoreConfig;
use crate::domain::{Item, ItemDraft, ItemId, ItemPatch, Photo};
use crate::error::{ClosetError, ClosetResult};

/// Characters escaped inside an object path ('/' is kept as separator)
const OBJECT_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const CACHE_CONTROL: &str = "max-age=3600";

/// Client for one Supabase table and one storage bucket.
pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    table: String,
    bucket: String,
}

impl SupabaseStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            table: config.table.clone(),
            bucket: config.bucket.clone(),
        }
    }

    /// Build from `SUPABASE_URL` / `SUPABASE_ANON_KEY` and friends
    pub fn from_env() -> ClosetResult<Self> {
        Ok(Self::new(&StoreConfig::from_env()?))
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            utf8_percent_encode(path, OBJECT_PATH)
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
    }

    fn id_filter(id: &ItemId) -> [(&'static str, String); 1] {
        [("id", format!("eq.{}", id))]
    }

    /// Turn a non-2xx response into an API error carrying the server message
    async fn check(response: Response) -> ClosetResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                ["message", "error", "msg"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    body
                }
            });

        Err(ClosetError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClosetResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RemoteStore for SupabaseStore {
    async fn list(&self) -> ClosetResult<Vec<Item>> {
        debug!("GET {}", self.table_url());
        let response = self
            .authorized(self.http.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn insert(&self, draft: &ItemDraft) -> ClosetResult<Item> {
        debug!("POST {} name={:?}", self.table_url(), draft.name);
        let response = self
            .authorized(self.http.post(self.table_url()))
            .query(&[("select", "*")])
            .header("Prefer", "return=representation")
            .header(ACCEPT, "application/vnd.pgrst.object+json")
            .json(draft)
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> ClosetResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        debug!("PATCH {} id={}", self.table_url(), id);
        let response = self
            .authorized(self.http.patch(self.table_url()))
            .query(&Self::id_filter(id))
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> ClosetResult<()> {
        debug!("DELETE {} id={}", self.table_url(), id);
        let response = self
            .authorized(self.http.delete(self.table_url()))
            .query(&Self::id_filter(id))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn upload_asset(&self, path: &str, photo: &Photo) -> ClosetResult<String> {
        debug!("upload {} ({} bytes)", path, photo.bytes.len());
        let response = self
            .authorized(self.http.post(self.object_url(path)))
            .header(CONTENT_TYPE, photo.mime_type())
            .header("cache-control", CACHE_CONTROL)
            .header("x-upsert", "false")
            .body(photo.bytes.clone())
            .send()
            .await?;
        Self::check(response).await?;
        Ok(path.to_string())
    }

    async fn delete_asset(&self, path: &str) -> ClosetResult<()> {
        debug!("remove asset {}", path);
        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);
        let response = self
            .authorized(self.http.delete(url))
            .json(&serde_json::json!({ "prefixes": [path] }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            utf8_percent_encode(path, OBJECT_PATH)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            url: "https://demo.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
            table: "items".to_string(),
            bucket: "images".to_string(),
        }
    }

    #[test]
    fn test_store_creation_trims_base_url() {
        let store = SupabaseStore::new(&config());
        assert_eq!(store.base_url, "https://demo.supabase.co");
        assert_eq!(store.table_url(), "https://demo.supabase.co/rest/v1/items");
    }

    #[test]
    fn test_public_url_escapes_path() {
        let store = SupabaseStore::new(&config());
        assert_eq!(
            store.public_url("1700000000000-ab12cd34.jpg"),
            "https://demo.supabase.co/storage/v1/object/public/images/1700000000000-ab12cd34.jpg"
        );
        assert_eq!(
            store.public_url("old name#1.png"),
            "https://demo.supabase.co/storage/v1/object/public/images/old%20name%231.png"
        );
    }

    #[test]
    fn test_object_url() {
        let store = SupabaseStore::new(&config());
        assert_eq!(
            store.object_url("a/b.jpg"),
            "https://demo.supabase.co/storage/v1/object/images/a/b.jpg"
        );
    }
}
