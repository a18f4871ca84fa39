#![forbid(unsafe_code)]

//! Drag-end events and the gesture source seam.
//!
//! A gesture recognizer owns everything about how a drag is detected
//! (activation distance, axis restriction, hit testing). By the time
//! this crate is involved the gesture has already been reduced to
//! "item `source` was dropped on item `target`, or on nothing".

#[cfg(any(test, feature = "test-helpers"))]
use std::collections::VecDeque;

use optlist_core::ItemId;

/// A completed drag gesture, resolved to item ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEndEvent {
    /// Item that was picked up.
    pub source: ItemId,
    /// Item whose position the drop landed on; `None` when the drop
    /// occurred outside any valid target (cancelled drag).
    pub target: Option<ItemId>,
}

impl DragEndEvent {
    /// A drop onto another item.
    #[must_use]
    pub fn new(source: impl Into<ItemId>, target: impl Into<ItemId>) -> Self {
        Self {
            source: source.into(),
            target: Some(target.into()),
        }
    }

    /// A drop outside any valid target.
    #[must_use]
    pub fn cancelled(source: impl Into<ItemId>) -> Self {
        Self {
            source: source.into(),
            target: None,
        }
    }
}

/// External collaborator that translates raw drag input into resolved
/// drag-end events.
///
/// Implementations deliver events in arrival order. How a gesture is
/// recognized is entirely the implementor's concern.
pub trait GestureSource {
    /// Next pending drag-end event, or `None` when quiescent.
    fn next_drag_end(&mut self) -> Option<DragEndEvent>;
}

/// Queue-backed gesture source fed literal events.
///
/// Lets tests drive the resolver without any pointer simulation.
/// Available to downstream crates' tests behind the `test-helpers`
/// feature.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Clone, Debug, Default)]
pub struct ScriptedGestureSource {
    queue: VecDeque<DragEndEvent>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl ScriptedGestureSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event.
    pub fn push(&mut self, event: DragEndEvent) {
        self.queue.push_back(event);
    }

    /// Number of pending events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Extend<DragEndEvent> for ScriptedGestureSource {
    fn extend<T: IntoIterator<Item = DragEndEvent>>(&mut self, iter: T) {
        self.queue.extend(iter);
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl GestureSource for ScriptedGestureSource {
    fn next_drag_end(&mut self) -> Option<DragEndEvent> {
        self.queue.pop_front()
    }
}
