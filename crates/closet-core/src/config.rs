//! Configuration
//!
//! Where the hosted backend lives and how deletes behave. Values come from a
//! lookup function: the process environment natively, compile-time values in
//! the browser build.

use serde::{Deserialize, Serialize};

use crate::domain::DeleteMode;
use crate::error::{ClosetError, ClosetResult};

pub const URL_VARS: &[&str] = &["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
pub const ANON_KEY_VARS: &[&str] = &["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];
pub const TABLE_VAR: &str = "CLOSET_TABLE";
pub const BUCKET_VAR: &str = "CLOSET_BUCKET";
pub const DELETE_MODE_VAR: &str = "CLOSET_DELETE_MODE";

fn default_table() -> String {
    "items".to_string()
}

fn default_bucket() -> String {
    "images".to_string()
}

/// First non-blank value among `names`
fn first_set<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl StoreConfig {
    pub fn from_env() -> ClosetResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ClosetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = first_set(&lookup, URL_VARS)
            .ok_or_else(|| ClosetError::Config(format!("{} is not set", URL_VARS[0])))?;
        let anon_key = first_set(&lookup, ANON_KEY_VARS)
            .ok_or_else(|| ClosetError::Config(format!("{} is not set", ANON_KEY_VARS[0])))?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClosetError::Config(format!("backend URL must be http(s): {}", url)));
        }

        Ok(Self {
            url,
            anon_key,
            table: first_set(&lookup, &[TABLE_VAR]).unwrap_or_else(default_table),
            bucket: first_set(&lookup, &[BUCKET_VAR]).unwrap_or_else(default_bucket),
        })
    }
}

/// Which backend settings are present, shown in the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvCheck {
    pub url: bool,
    pub anon_key: bool,
}

impl EnvCheck {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: first_set(&lookup, URL_VARS).is_some(),
            anon_key: first_set(&lookup, ANON_KEY_VARS).is_some(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.url && self.anon_key
    }

    /// "URL: OK • ANON: MISSING"
    pub fn describe(&self) -> String {
        let flag = |ok: bool| if ok { "OK" } else { "MISSING" };
        format!("URL: {} • ANON: {}", flag(self.url), flag(self.anon_key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosetConfig {
    pub store: StoreConfig,
    #[serde(default)]
    pub delete_mode: DeleteMode,
}

impl ClosetConfig {
    pub fn from_env() -> ClosetResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ClosetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let delete_mode = match first_set(&lookup, &[DELETE_MODE_VAR]) {
            Some(raw) => DeleteMode::parse(&raw).ok_or_else(|| {
                ClosetError::Config(format!("{} must be optimistic or confirmed, got {}", DELETE_MODE_VAR, raw))
            })?,
            None => DeleteMode::default(),
        };

        Ok(Self {
            store: StoreConfig::from_lookup(lookup)?,
            delete_mode,
        })
    }
}
