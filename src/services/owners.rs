//! Owner and association service

use crate::{
    error::AppResult,
    models::{Item, Owner, OwnerInput, OwnerWithItems},
    repository::Repository,
};

#[derive(Clone)]
pub struct OwnersService {
    repository: Repository,
}

impl OwnersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List owners with their held items resolved
    pub fn list_owners(&self) -> AppResult<Vec<OwnerWithItems>> {
        self.repository.read(|store| store.list_owners())
    }

    pub fn get_owner(&self, id: i64) -> AppResult<Owner> {
        self.repository.read(|store| store.get_owner(id))?
    }

    pub fn create_owner(&self, input: OwnerInput) -> AppResult<Owner> {
        let owner = self.repository.write(|store| store.create_owner(input))?;
        tracing::info!(owner_id = owner.id, "Owner created");
        Ok(owner)
    }

    /// Items currently held by an owner
    pub fn list_owner_items(&self, owner_id: i64) -> AppResult<Vec<Item>> {
        let (held, items) = self.repository.read(|store| -> AppResult<_> {
            let owner = store.get_owner(owner_id)?;
            Ok((owner.held_item_ids.len(), store.list_owner_items(owner_id)?))
        })??;
        if items.len() < held {
            tracing::warn!(
                owner_id,
                skipped = held - items.len(),
                "Owner holds references to items that no longer exist"
            );
        }
        Ok(items)
    }

    /// Record that an owner holds an item
    pub fn associate(&self, owner_id: i64, item_id: i64) -> AppResult<Owner> {
        let owner = self
            .repository
            .write(|store| store.associate(owner_id, item_id))?;
        tracing::info!(owner_id, item_id, held = owner.held_item_ids.len(), "Item associated with owner");
        Ok(owner)
    }
}
