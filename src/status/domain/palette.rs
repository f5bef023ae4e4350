//! Slug lookup over a workspace's ordered statuses.

use super::{StatusEntry, StatusSlug};

/// A workspace's statuses in column order, for rendering and lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPalette {
    entries: Vec<StatusEntry>,
}

impl StatusPalette {
    /// Builds a palette, ordering entries by position.
    ///
    /// Entries sharing a position keep their input order.
    #[must_use]
    pub fn new(mut entries: Vec<StatusEntry>) -> Self {
        entries.sort_by_key(StatusEntry::position);
        Self { entries }
    }

    /// Returns the entries in column order.
    #[must_use]
    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    /// Finds the entry for `slug`.
    ///
    /// Returns `None` for an orphaned slug, which then renders without a
    /// colour and matches no column.
    #[must_use]
    pub fn resolve(&self, slug: &StatusSlug) -> Option<&StatusEntry> {
        self.entries.iter().find(|entry| entry.slug() == slug)
    }

    /// Returns `true` when some entry uses `slug`.
    #[must_use]
    pub fn contains(&self, slug: &StatusSlug) -> bool {
        self.resolve(slug).is_some()
    }

    /// Returns the first column's slug, the default for new tasks.
    #[must_use]
    pub fn first_slug(&self) -> Option<&StatusSlug> {
        self.entries.first().map(StatusEntry::slug)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
