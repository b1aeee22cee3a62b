//! The fetched item collection and the pure view derivation.
//!
//! The sheet is the only source of truth: the collection is replaced
//! wholesale on every successful fetch and nothing in this crate ever
//! merges a mutation's known effect into it locally.

mod item;
mod store;
mod view;

pub use item::{Item, RawItem};
pub use store::CatalogStore;
pub use view::{view, SortMode};
