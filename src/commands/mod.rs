//! Closet Commands
//!
//! Frontend flows that call the remote store and fold the results into the
//! app store, organized by domain.

mod item;
mod photo;

pub use item::*;
pub use photo::*;
