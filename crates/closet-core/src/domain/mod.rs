//! Domain Layer
//!
//! Contains the closet entities and the user-editable state around them.
//! Nothing here talks to the network.

mod delete_mode;
mod filter;
mod form;
mod item;
mod photo;

pub use delete_mode::DeleteMode;
pub use filter::{Facet, FilterState, SortMode};
pub use form::ItemForm;
pub use item::{Item, ItemDraft, ItemId, ItemPatch, CATEGORIES, COLORS, SIZES};
pub use photo::Photo;
