//! In-memory relational store.
//!
//! Owns the item and owner collections. Item operations live in
//! `repository::items`, owner operations in `repository::owners`.

use crate::models::{Domain, Item, Owner};

/// Two ordered collections with cross references from owners to items.
///
/// Ids come from per-collection counters that only ever grow, so an id is
/// never handed out twice even after deletes. All reads return copies.
#[derive(Debug, Clone)]
pub struct RelationalStore {
    pub(super) items: Vec<Item>,
    pub(super) owners: Vec<Owner>,
    next_item_id: i64,
    next_owner_id: i64,
}

impl RelationalStore {
    /// Create an empty store; the first ids handed out are 1
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            owners: Vec::new(),
            next_item_id: 1,
            next_owner_id: 1,
        }
    }

    /// Create a store holding the given records, in order.
    ///
    /// Counters resume after the highest seeded id.
    pub fn with_records(items: Vec<Item>, owners: Vec<Owner>) -> Self {
        let next_item_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let next_owner_id = owners.iter().map(|owner| owner.id).max().unwrap_or(0) + 1;
        Self {
            items,
            owners,
            next_item_id,
            next_owner_id,
        }
    }

    /// Create a store reset to the domain's seed set
    pub fn seeded(domain: Domain) -> Self {
        let (items, owners) = domain.seed();
        Self::with_records(items, owners)
    }

    /// Number of (items, owners) currently stored
    pub fn counts(&self) -> (usize, usize) {
        (self.items.len(), self.owners.len())
    }

    pub(super) fn allocate_item_id(&mut self) -> i64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    pub(super) fn allocate_owner_id(&mut self) -> i64 {
        let id = self.next_owner_id;
        self.next_owner_id += 1;
        id
    }
}

impl Default for RelationalStore {
    fn default() -> Self {
        Self::new()
    }
}
