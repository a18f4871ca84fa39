#![forbid(unsafe_code)]

//! optlist public facade crate.
//!
//! Re-exports the stable surface from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! The engine is two cooperating pieces: [`OrderedItemStore`] owns the
//! sequence of named options, and [`ReorderResolver`] turns drag-end
//! events from a [`GestureSource`] into store moves.
//!
//! ```
//! use optlist::prelude::*;
//!
//! let mut store = OrderedItemStore::new();
//! store.append();
//! let outcome = ReorderResolver::new().resolve(&mut store, &DragEndEvent::new("4", "1"));
//! assert!(outcome.is_moved());
//! assert_eq!(store.items()[0].id().as_str(), "4");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use optlist_core::catalog::{Catalog, CatalogEntry};
pub use optlist_core::item::{Item, ItemId};
pub use optlist_core::store::{DEFAULT_SEED, MAX_ITEMS, OrderedItemStore};

// --- Reorder re-exports ----------------------------------------------------

pub use optlist_reorder::gesture::{DragEndEvent, GestureSource};
#[cfg(feature = "test-helpers")]
pub use optlist_reorder::gesture::ScriptedGestureSource;
pub use optlist_reorder::resolver::{ReorderResolver, ResolveOutcome};
pub use optlist_reorder::view_state::{ItemViewState, ViewStateMap};

/// Convenience prelude for common usage.
pub mod prelude {
    pub use crate::{
        Catalog, CatalogEntry, DragEndEvent, GestureSource, Item, ItemId, OrderedItemStore,
        ReorderResolver, ResolveOutcome, ViewStateMap,
    };
}
