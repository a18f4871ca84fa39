#![forbid(unsafe_code)]

//! Per-item presentation state, keyed by stable id.
//!
//! A render layer typically carries transient state for each row: is
//! the name picker open, which label is shown on the trigger. That
//! state belongs to the presentation, not to the store — but it must
//! follow the item through reorders, so it is keyed by [`ItemId`]
//! rather than by position.

use std::collections::HashMap;

use optlist_core::ItemId;

/// Transient presentation state for one list row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemViewState {
    /// Whether the name picker popover is open for this row.
    pub popover_open: bool,
    /// Render-local mirror of the picked label.
    pub selected: Option<String>,
}

/// Per-item view state map.
///
/// Entries materialize lazily: an item with no recorded state behaves
/// as [`ItemViewState::default`].
#[derive(Clone, Debug, Default)]
pub struct ViewStateMap {
    states: HashMap<ItemId, ItemViewState>,
}

impl ViewStateMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State recorded for the item, if any.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ItemViewState> {
        self.states.get(id)
    }

    /// Mutable state for the item, default on first touch.
    pub fn entry(&mut self, id: &ItemId) -> &mut ItemViewState {
        self.states.entry(id.clone()).or_default()
    }

    /// Open the item's popover.
    pub fn open_popover(&mut self, id: &ItemId) {
        self.entry(id).popover_open = true;
    }

    /// Close the item's popover. No-op when the item has no state yet.
    pub fn close_popover(&mut self, id: &ItemId) {
        if let Some(state) = self.states.get_mut(id) {
            state.popover_open = false;
        }
    }

    /// Flip the item's popover; returns the new open state.
    pub fn toggle_popover(&mut self, id: &ItemId) -> bool {
        let state = self.entry(id);
        state.popover_open = !state.popover_open;
        state.popover_open
    }

    /// Returns true if the item's popover is open.
    #[must_use]
    pub fn is_popover_open(&self, id: &ItemId) -> bool {
        self.states.get(id).is_some_and(|s| s.popover_open)
    }

    /// Record the label shown on the item's trigger.
    pub fn set_selected(&mut self, id: &ItemId, label: impl Into<String>) {
        self.entry(id).selected = Some(label.into());
    }

    /// Label currently mirrored for the item, if any.
    #[must_use]
    pub fn selected(&self, id: &ItemId) -> Option<&str> {
        self.states.get(id).and_then(|s| s.selected.as_deref())
    }

    /// Number of items with an open popover.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.states.values().filter(|s| s.popover_open).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optlist_core::OrderedItemStore;

    #[test]
    fn default_state_until_touched() {
        let map = ViewStateMap::new();
        let id = ItemId::from("1");
        assert!(map.get(&id).is_none());
        assert!(!map.is_popover_open(&id));
        assert!(map.selected(&id).is_none());
    }

    #[test]
    fn toggle_and_close() {
        let mut map = ViewStateMap::new();
        let id = ItemId::from("1");
        assert!(map.toggle_popover(&id));
        assert!(map.is_popover_open(&id));
        assert_eq!(map.open_count(), 1);
        assert!(!map.toggle_popover(&id));

        map.open_popover(&id);
        map.close_popover(&id);
        assert!(!map.is_popover_open(&id));
        assert_eq!(map.open_count(), 0);
    }

    #[test]
    fn close_without_state_is_noop() {
        let mut map = ViewStateMap::new();
        let id = ItemId::from("1");
        map.close_popover(&id);
        assert!(map.get(&id).is_none());
    }

    #[test]
    fn selected_mirror_per_item() {
        let mut map = ViewStateMap::new();
        map.set_selected(&ItemId::from("2"), "Name 3");
        assert_eq!(map.selected(&ItemId::from("2")), Some("Name 3"));
        assert_eq!(map.selected(&ItemId::from("1")), None);
    }

    #[test]
    fn state_follows_item_across_reorders() {
        let mut store = OrderedItemStore::with_seed(4);
        let mut map = ViewStateMap::new();
        let lifted = store.get(2).unwrap().id().clone();
        map.open_popover(&lifted);
        map.set_selected(&lifted, "Name 3");

        store.move_item(2, 0);

        // Keyed by id, not by position: still the same item's state.
        let now_first = store.get(0).unwrap().id();
        assert_eq!(*now_first, lifted);
        assert!(map.is_popover_open(now_first));
        assert_eq!(map.selected(now_first), Some("Name 3"));
    }
}
