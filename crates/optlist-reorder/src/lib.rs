#![forbid(unsafe_code)]

//! Gesture bridging for optlist.
//!
//! Turns resolved drag-end gestures into store moves. The gesture
//! recognizer itself (pointer thresholds, collision geometry) lives
//! behind the [`GestureSource`] trait; this crate only ever sees
//! already-resolved source/target id pairs, so everything here is
//! testable with synthetic events.

pub mod gesture;
pub mod resolver;
pub mod view_state;

pub use gesture::{DragEndEvent, GestureSource};
#[cfg(any(test, feature = "test-helpers"))]
pub use gesture::ScriptedGestureSource;
pub use resolver::{ReorderResolver, ResolveOutcome};
pub use view_state::{ItemViewState, ViewStateMap};
