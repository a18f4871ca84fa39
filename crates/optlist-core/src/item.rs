#![forbid(unsafe_code)]

//! Item identity and the orderable entry.

use core::fmt;

/// Stable identifier for an [`Item`].
///
/// Assigned once when the item is created and never reused or mutated
/// for the life of the owning store. Compared by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from a raw string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A single orderable entry: a stable id plus a mutable optional name.
///
/// The name starts unassigned and is the only field that mutates after
/// creation; identity and position are managed by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: Option<String>,
}

impl Item {
    /// Create an item with no name assigned yet.
    #[must_use]
    pub fn unnamed(id: ItemId) -> Self {
        Self { id, name: None }
    }

    /// The item's stable id.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// The currently assigned name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }
}
