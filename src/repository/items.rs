//! Item operations on RelationalStore

use super::store::RelationalStore;
use crate::{
    error::{AppError, AppResult},
    models::{Item, ItemInput, ItemQuery},
};

fn item_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Item with id {} not found", id))
}

impl RelationalStore {
    /// List items matching the filter, in insertion order
    pub fn list_items(&self, filter: &ItemQuery) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// Get an item by ID
    pub fn get_item(&self, id: i64) -> AppResult<Item> {
        self.find_item(id).cloned().ok_or_else(|| item_not_found(id))
    }

    /// Create an item with the next item id
    pub fn create_item(&mut self, input: ItemInput) -> AppResult<Item> {
        let fields = input.into_fields()?;
        let item = Item {
            id: self.allocate_item_id(),
            name: fields.name,
            category: fields.category,
            quantity: fields.quantity,
            available: fields.available.unwrap_or(true),
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace the mutable fields of an item.
    ///
    /// `available` is only replaced when the input carries it.
    pub fn update_item(&mut self, id: i64, input: ItemInput) -> AppResult<Item> {
        let index = self.item_index(id).ok_or_else(|| item_not_found(id))?;
        let fields = input.into_fields()?;

        let item = &mut self.items[index];
        item.name = fields.name;
        item.category = fields.category;
        item.quantity = fields.quantity;
        if let Some(available) = fields.available {
            item.available = available;
        }
        Ok(item.clone())
    }

    /// Delete an item and drop every owner reference to it.
    ///
    /// Returns the number of owner references that were removed.
    pub fn delete_item(&mut self, id: i64) -> AppResult<usize> {
        let index = self.item_index(id).ok_or_else(|| item_not_found(id))?;
        self.items.remove(index);

        let mut released = 0;
        for owner in &mut self.owners {
            let before = owner.held_item_ids.len();
            owner.held_item_ids.retain(|held| *held != id);
            released += before - owner.held_item_ids.len();
        }
        Ok(released)
    }

    /// Mark an item as no longer available (checked out / adopted)
    pub fn claim_item(&mut self, id: i64) -> AppResult<Item> {
        let index = self.item_index(id).ok_or_else(|| item_not_found(id))?;
        let item = &mut self.items[index];
        item.available = false;
        Ok(item.clone())
    }

    pub(super) fn find_item(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_index(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
