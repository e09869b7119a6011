//! In-memory item registry with an id index and a description index.

use std::collections::{BTreeSet, HashMap};

use storekeep_core::{DomainError, DomainResult};

use crate::item::{Item, ItemId};
use crate::listing::{Listing, ListingEntry};

/// Key of the description index.
///
/// Ordered by description first, then by id, so items sharing a description
/// coexist and list in a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct DescriptionKey {
    description: String,
    id: ItemId,
}

impl DescriptionKey {
    fn of(item: &Item) -> Self {
        Self {
            description: item.description().to_owned(),
            id: item.id().clone(),
        }
    }
}

/// Registry of stored items.
///
/// `by_id` owns every item and is the existence/uniqueness authority.
/// `by_description` holds one key per owned item and defines listing order.
/// Both are only mutated by `add` and `remove`, which check first and then
/// touch both indexes, so a rejected call leaves the registry unchanged.
#[derive(Debug, Default)]
pub struct Registry {
    by_id: HashMap<ItemId, Item>,
    by_description: BTreeSet<DescriptionKey>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Insert an item into both indexes.
    ///
    /// Fails with `DuplicateItem` if an item with the same id is present.
    pub fn add(&mut self, item: Item) -> DomainResult<()> {
        if self.by_id.contains_key(item.id()) {
            tracing::debug!(item_id = %item.id(), "rejected duplicate item");
            return Err(DomainError::duplicate_item(item.id().as_str()));
        }

        tracing::debug!(
            item_id = %item.id(),
            description = item.description(),
            "item added"
        );

        self.by_description.insert(DescriptionKey::of(&item));
        self.by_id.insert(item.id().clone(), item);
        Ok(())
    }

    /// Look up an item by exact id.
    pub fn find_by_id(&self, id: &str) -> DomainResult<&Item> {
        self.by_id
            .get(id)
            .ok_or_else(|| DomainError::item_not_found(id))
    }

    /// Remove an item from both indexes and hand it back to the caller.
    ///
    /// Fails with `ItemNotFound` before touching either index.
    pub fn remove(&mut self, id: &str) -> DomainResult<Item> {
        let Some(item) = self.by_id.remove(id) else {
            tracing::debug!(item_id = id, "remove of unknown item");
            return Err(DomainError::item_not_found(id));
        };

        self.by_description.remove(&DescriptionKey::of(&item));
        tracing::debug!(item_id = id, "item removed");
        Ok(item)
    }

    /// Items in ascending description order (ties broken by id).
    ///
    /// Every description key has a matching entry in `by_id`: keys are only
    /// inserted alongside their item in `add` and only dropped with it in
    /// `remove`, so the lookup below never misses.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.by_description
            .iter()
            .filter_map(|key| self.by_id.get(&key.id))
    }

    /// Snapshot of `(description, location)` rows in description order.
    pub fn list_by_description(&self) -> Listing {
        Listing::new(
            self.iter()
                .map(|item| ListingEntry {
                    description: item.description().to_owned(),
                    location: item.location().to_owned(),
                })
                .collect(),
        )
    }

    // Both indexes describe the same set of items.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.by_id.len() == self.by_description.len()
            && self.by_description.iter().all(|key| {
                self.by_id
                    .get(&key.id)
                    .is_some_and(|item| item.description() == key.description)
            })
    }
}
