#![forbid(unsafe_code)]

//! Fixed catalog of selectable names.
//!
//! The catalog is supplied once at initialization and shared read-only
//! with whatever surface lets the user pick a name. The core never
//! mutates it.

/// One selectable name: an id plus the label shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Identifier of the entry within the catalog.
    pub id: String,
    /// Human-readable label offered for selection.
    pub label: String,
}

impl CatalogEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Read-only set of `{id, label}` pairs offered as selectable names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from its entries.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// All entries, in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label of the entry with the given id, if present.
    #[must_use]
    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.label.as_str())
    }

    /// Entries whose label contains `query`, case-insensitively.
    ///
    /// An empty query matches every entry. This is the matching rule
    /// behind a search-as-you-type name picker; the picker itself is a
    /// presentation concern.
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a CatalogEntry> + use<'a> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| needle.is_empty() || e.label.to_lowercase().contains(&needle))
    }
}
