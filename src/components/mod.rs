//! UI Components
//!
//! Reusable Leptos components.

mod closet_header;
mod delete_confirm_button;
mod error_banner;
mod filter_bar;
mod item_card;
mod item_editor;
mod item_grid;

pub use closet_header::ClosetHeader;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use item_card::ItemCard;
pub use item_editor::ItemEditor;
pub use item_grid::ItemGrid;
