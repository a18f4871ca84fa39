#![forbid(unsafe_code)]

//! Core data model for optlist: stable item identities, the ordered
//! item store, and the read-only option catalog.
//!
//! The store owns the sequence and is its single writer; everything a
//! UI adapter renders comes from [`OrderedItemStore::items`]. Gesture
//! handling lives in `optlist-reorder`.

pub mod catalog;
pub mod item;
pub mod store;

pub use catalog::{Catalog, CatalogEntry};
pub use item::{Item, ItemId};
pub use store::{DEFAULT_SEED, MAX_ITEMS, OrderedItemStore};
