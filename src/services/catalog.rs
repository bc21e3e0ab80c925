//! Catalog (item) management service

use crate::{
    error::AppResult,
    models::{Item, ItemInput, ItemQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List items matching the filter
    pub fn list_items(&self, query: &ItemQuery) -> AppResult<Vec<Item>> {
        self.repository.read(|store| store.list_items(query))
    }

    pub fn get_item(&self, id: i64) -> AppResult<Item> {
        self.repository.read(|store| store.get_item(id))?
    }

    pub fn create_item(&self, input: ItemInput) -> AppResult<Item> {
        let item = self.repository.write(|store| store.create_item(input))?;
        tracing::info!(item_id = item.id, name = %item.name, "Item created");
        Ok(item)
    }

    pub fn update_item(&self, id: i64, input: ItemInput) -> AppResult<Item> {
        let item = self.repository.write(|store| store.update_item(id, input))?;
        tracing::info!(item_id = id, "Item updated");
        Ok(item)
    }

    /// Delete an item, releasing it from every owner that held it
    pub fn delete_item(&self, id: i64) -> AppResult<()> {
        let released = self.repository.write(|store| store.delete_item(id))?;
        if released > 0 {
            tracing::debug!(item_id = id, released, "Removed owner references to deleted item");
        }
        tracing::info!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Mark an item as claimed (checked out / adopted)
    pub fn claim_item(&self, id: i64) -> AppResult<Item> {
        let item = self.repository.write(|store| store.claim_item(id))?;
        tracing::info!(item_id = id, "Item claimed");
        Ok(item)
    }

    /// Number of (items, owners) held by the store
    pub fn counts(&self) -> AppResult<(usize, usize)> {
        self.repository.read(|store| store.counts())
    }
}
