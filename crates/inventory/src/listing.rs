//! Ordered listing snapshots and their text rendering.

use serde::{Deserialize, Serialize};

/// One row of a description-ordered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub description: String,
    pub location: String,
}

/// Snapshot of the registry in ascending description order.
///
/// Taken at call time; later registry mutations do not affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    entries: Vec<ListingEntry>,
}

impl Listing {
    pub(crate) fn new(entries: Vec<ListingEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ListingEntry> {
        self.entries.iter()
    }

    /// `(description, location)` pairs, in listing order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.description.as_str(), e.location.as_str()))
            .collect()
    }
}

impl IntoIterator for Listing {
    type Item = ListingEntry;
    type IntoIter = std::vec::IntoIter<ListingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a ListingEntry;
    type IntoIter = core::slice::Iter<'a, ListingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl core::fmt::Display for Listing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items in Description Order:")?;
        for entry in &self.entries {
            writeln!(f, "- {}: {}", entry.description, entry.location)?;
        }
        Ok(())
    }
}
