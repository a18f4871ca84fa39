#![forbid(unsafe_code)]

//! Ordered item store.
//!
//! [`OrderedItemStore`] owns the sequence of items and is its single
//! writer. The order of the sequence is the product: callers reorder
//! it with [`OrderedItemStore::move_item`], grow it with
//! [`OrderedItemStore::append`], and assign names in place with
//! [`OrderedItemStore::rename`]. All operations complete synchronously;
//! readers only ever observe post-operation snapshots.
//!
//! # Invariants
//!
//! 1. Ids in the sequence are pairwise distinct and never reused.
//! 2. `len() <= MAX_ITEMS` at all times.
//! 3. Appended items start with no name assigned.
//! 4. `move_item` permutes the sequence; the id set and each item's
//!    name are unchanged by it.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Append at capacity | 51st item requested | Refused, `None` returned |
//! | Rename out of range | Adapter bug | No-op, `false` returned |
//! | Move out of range | Adapter bug | No-op, `false` returned |
//! | Move onto itself | Drop resolved to source slot | No-op, `false` returned |
//!
//! None of these raise; the sequence is left untouched so the UI stays
//! consistent.

use crate::item::{Item, ItemId};

/// Maximum number of items a store will hold.
pub const MAX_ITEMS: usize = 50;

/// Number of items a freshly created store is seeded with.
pub const DEFAULT_SEED: usize = 3;

/// Owner of the ordered sequence of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedItemStore {
    sequence: Vec<Item>,
    /// Next id to allocate. Monotonic, never reused, so ids stay
    /// unique even if item removal is ever added.
    next_id: u64,
}

impl Default for OrderedItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedItemStore {
    /// Create a store seeded with [`DEFAULT_SEED`] unnamed items,
    /// ids `"1"`, `"2"`, `"3"`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a store seeded with `count` unnamed items, ids `"1"`
    /// through `"count"`. `count` is clamped to [`MAX_ITEMS`].
    #[must_use]
    pub fn with_seed(count: usize) -> Self {
        let count = count.min(MAX_ITEMS) as u64;
        let sequence = (1..=count)
            .map(|n| Item::unnamed(ItemId::from(n.to_string())))
            .collect();
        Self {
            sequence,
            next_id: count + 1,
        }
    }

    /// Append a fresh unnamed item at the end of the sequence.
    ///
    /// Returns the new item's id, or `None` when the store is full.
    /// A full store is left untouched; callers should disable the
    /// affordance via [`OrderedItemStore::is_full`] rather than rely
    /// on the refusal.
    pub fn append(&mut self) -> Option<ItemId> {
        if self.sequence.len() >= MAX_ITEMS {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.sequence.len(), "append refused at capacity");
            return None;
        }
        let id = ItemId::from(self.next_id.to_string());
        self.next_id += 1;
        self.sequence.push(Item::unnamed(id.clone()));
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %id, len = self.sequence.len(), "item appended");
        Some(id)
    }

    /// Assign a name to the item at `index`, in place.
    ///
    /// Identity and ordering are untouched. Returns `false` (and does
    /// nothing) when `index` is out of range.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        let Some(item) = self.sequence.get_mut(index) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, "rename refused: index out of range");
            return false;
        };
        item.set_name(name.into());
        #[cfg(feature = "tracing")]
        tracing::debug!(index, id = %item.id(), "item renamed");
        true
    }

    /// Relocate the item at `from` to position `to`.
    ///
    /// Remove-then-insert semantics: items between the two positions
    /// shift by one, items outside that span keep their positions.
    /// Returns `false` (and does nothing) when `from == to` or either
    /// index is out of range.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.sequence.len();
        if from == to || from >= len || to >= len {
            #[cfg(feature = "tracing")]
            tracing::trace!(from, to, len, "move refused");
            return false;
        }
        let item = self.sequence.remove(from);
        self.sequence.insert(to, item);
        #[cfg(feature = "tracing")]
        tracing::debug!(from, to, "item moved");
        true
    }

    /// The live ordered sequence, for read and render purposes.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.sequence
    }

    /// Number of items currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns true if the store is at [`MAX_ITEMS`].
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.sequence.len() >= MAX_ITEMS
    }

    /// Appends still possible before the capacity bound is hit.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        MAX_ITEMS - self.sequence.len()
    }

    /// Position of the item with the given id, if present.
    #[must_use]
    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.sequence.iter().position(|item| item.id() == id)
    }

    /// The item at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.sequence.get(index)
    }
}
