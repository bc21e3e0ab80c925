//! Owner and association operations on RelationalStore

use super::store::RelationalStore;
use crate::{
    error::{AppError, AppResult},
    models::{Item, Owner, OwnerInput, OwnerWithItems},
};

fn owner_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Owner with id {} not found", id))
}

impl RelationalStore {
    /// List all owners with their held items resolved
    pub fn list_owners(&self) -> Vec<OwnerWithItems> {
        self.owners
            .iter()
            .map(|owner| OwnerWithItems {
                id: owner.id,
                name: owner.name.clone(),
                email: owner.email.clone(),
                items: self.resolve_items(&owner.held_item_ids),
            })
            .collect()
    }

    /// Get an owner by ID
    pub fn get_owner(&self, id: i64) -> AppResult<Owner> {
        self.find_owner(id).cloned().ok_or_else(|| owner_not_found(id))
    }

    /// Create an owner holding no items
    pub fn create_owner(&mut self, input: OwnerInput) -> AppResult<Owner> {
        let (name, email) = input.into_fields()?;
        let owner = Owner {
            id: self.allocate_owner_id(),
            name,
            email,
            held_item_ids: Vec::new(),
        };
        self.owners.push(owner.clone());
        Ok(owner)
    }

    /// Items held by an owner, in association order.
    ///
    /// References that no longer resolve are skipped.
    pub fn list_owner_items(&self, owner_id: i64) -> AppResult<Vec<Item>> {
        let owner = self.find_owner(owner_id).ok_or_else(|| owner_not_found(owner_id))?;
        Ok(self.resolve_items(&owner.held_item_ids))
    }

    /// Record that an owner holds an item. Repeated calls accumulate.
    pub fn associate(&mut self, owner_id: i64, item_id: i64) -> AppResult<Owner> {
        let owner_index = self
            .owners
            .iter()
            .position(|owner| owner.id == owner_id)
            .ok_or_else(|| owner_not_found(owner_id))?;
        self.get_item(item_id)?;

        let owner = &mut self.owners[owner_index];
        owner.held_item_ids.push(item_id);
        Ok(owner.clone())
    }

    fn find_owner(&self, id: i64) -> Option<&Owner> {
        self.owners.iter().find(|owner| owner.id == id)
    }

    fn resolve_items(&self, ids: &[i64]) -> Vec<Item> {
        ids.iter()
            .filter_map(|id| self.find_item(*id).cloned())
            .collect()
    }
}
