//! Delete Mode
//!
//! Whether a delete leaves local state before or after the store confirms it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Remove from local state immediately, whatever the store answers
    Optimistic,
    /// Keep the item until the store succeeds, then re-sync the list
    #[default]
    Confirmed,
}

impl DeleteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteMode::Optimistic => "optimistic",
            DeleteMode::Confirmed => "confirmed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Some(DeleteMode::Optimistic),
            "confirmed" => Some(DeleteMode::Confirmed),
            _ => None,
        }
    }
}
