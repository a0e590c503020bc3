//! Closet Core
//!
//! Layered architecture:
//! - domain: Items, filter state, form state and photos
//! - visible / collation: Visible-list derivation over the item collection
//! - view_model: In-memory state the UI renders
//! - store: Remote store abstraction and implementations
//! - actions / session: Async flows tying the view model to a store

pub mod actions;
pub mod collation;
pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod store;
pub mod view_model;
pub mod visible;

pub use actions::Added;
pub use config::{ClosetConfig, EnvCheck, StoreConfig};
pub use domain::{
    DeleteMode, Facet, FilterState, Item, ItemDraft, ItemForm, ItemId, ItemPatch, Photo,
    SortMode, CATEGORIES, COLORS, SIZES,
};
pub use error::{ClosetError, ClosetResult};
pub use session::ClosetSession;
pub use store::{InMemoryStore, RemoteStore, StoreOp, SupabaseStore};
pub use view_model::{AfterDelete, Closet};
pub use visible::visible_items;
