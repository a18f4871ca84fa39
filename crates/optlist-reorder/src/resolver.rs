#![forbid(unsafe_code)]

//! Reorder resolution.
//!
//! [`ReorderResolver`] bridges a single drag-end event to a store
//! move. There is no multi-step drag state here: each event is a
//! complete request, resolved to exactly one [`ResolveOutcome`].
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | No target | Drop outside any valid target | `NoTarget`, store untouched |
//! | Source == target | Item dropped on itself | `SelfDrop`, store untouched |
//! | Id not in sequence | Gesture source out of sync | `UnknownId`, store untouched |
//! | Store refuses move | Indices resolve to same slot | `SamePosition`, store untouched |
//!
//! Malformed requests can only come from an adapter bug, never from
//! user input, so every one of them degrades to a named no-op rather
//! than an error — the UI must stay consistent.

use optlist_core::OrderedItemStore;

use crate::gesture::{DragEndEvent, GestureSource};

/// Outcome of resolving one drag-end event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The move was applied.
    Moved {
        /// Index the item was lifted from.
        from: usize,
        /// Index the item now occupies.
        to: usize,
    },
    /// Drop landed outside any valid target.
    NoTarget,
    /// Item was dropped on itself.
    SelfDrop,
    /// Source or target id is not present in the sequence.
    UnknownId,
    /// Both ids resolved, but the store refused the move. Unreachable
    /// when store and gesture source agree on the sequence.
    SamePosition,
}

impl ResolveOutcome {
    /// Returns true if the sequence was reordered.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Stateless bridge from drag-end events to store moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReorderResolver;

impl ReorderResolver {
    /// Create a resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve one drag-end event against the store.
    ///
    /// Every outcome other than [`ResolveOutcome::Moved`] leaves the
    /// store unchanged.
    pub fn resolve(&self, store: &mut OrderedItemStore, event: &DragEndEvent) -> ResolveOutcome {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("resolve_drag_end", source = %event.source).entered();

        let Some(target) = &event.target else {
            return ResolveOutcome::NoTarget;
        };
        if *target == event.source {
            return ResolveOutcome::SelfDrop;
        }
        let (Some(from), Some(to)) = (store.index_of(&event.source), store.index_of(target))
        else {
            #[cfg(feature = "tracing")]
            tracing::trace!(target = %target, "drag-end referenced unknown id");
            return ResolveOutcome::UnknownId;
        };
        if store.move_item(from, to) {
            ResolveOutcome::Moved { from, to }
        } else {
            ResolveOutcome::SamePosition
        }
    }

    /// Pump a gesture source until quiescent, resolving each event in
    /// arrival order. Events are processed one at a time to completion;
    /// the store has no overlapping mutation.
    pub fn drain(
        &self,
        store: &mut OrderedItemStore,
        source: &mut impl GestureSource,
    ) -> Vec<ResolveOutcome> {
        let mut outcomes = Vec::new();
        while let Some(event) = source.next_drag_end() {
            outcomes.push(self.resolve(store, &event));
        }
        outcomes
    }
}
