//! Filter/Sort State
//!
//! What the user has asked to see. Empty sets and a blank query mean
//! "no restriction on that axis".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sort mode for the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Most recently created first
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    /// Name, A to Z
    #[serde(rename = "az")]
    NameAsc,
    /// Name, Z to A
    #[serde(rename = "za")]
    NameDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Newest,
        SortMode::Oldest,
        SortMode::NameAsc,
        SortMode::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::NameAsc => "az",
            SortMode::NameDesc => "za",
        }
    }

    /// Unknown values fall back to newest
    pub fn from_str(s: &str) -> Self {
        match s {
            "oldest" => SortMode::Oldest,
            "az" => SortMode::NameAsc,
            "za" => SortMode::NameDesc,
            _ => SortMode::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Oldest => "Oldest",
            SortMode::NameAsc => "A → Z",
            SortMode::NameDesc => "Z → A",
        }
    }
}

/// One of the set-membership filter axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Category,
    Color,
    Size,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub categories: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub sort: SortMode,
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Category => &self.categories,
            Facet::Color => &self.colors,
            Facet::Size => &self.sizes,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Category => &mut self.categories,
            Facet::Color => &mut self.colors,
            Facet::Size => &mut self.sizes,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).contains(value)
    }

    /// Add the value to the facet's selection, or remove it if already there
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let set = self.selected_mut(facet);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    /// True when no axis restricts the collection (sort still applies)
    pub fn is_unrestricted(&self) -> bool {
        self.query.trim().is_empty()
            && self.categories.is_empty()
            && self.colors.is_empty()
            && self.sizes.is_empty()
    }

    /// Drop every restriction but keep the sort mode
    pub fn clear(&mut self) {
        self.query.clear();
        self.categories.clear();
        self.colors.clear();
        self.sizes.clear();
    }
}
