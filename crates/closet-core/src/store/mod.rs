//! Remote Store Layer
//!
//! The hosted table + bucket abstraction and its implementations.

mod memory;
mod supabase;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::{InMemoryStore, StoreOp};
pub use supabase::SupabaseStore;
pub use traits::RemoteStore;
