//! Repository layer: the in-memory store behind one exclusive lock

pub mod items;
pub mod owners;
pub mod store;

use std::sync::{Arc, Mutex, MutexGuard};

pub use store::RelationalStore;

use crate::error::{AppError, AppResult};

/// Shared handle to the relational store.
///
/// Every operation takes the same mutex, so id allocation and collection
/// mutation are atomic with respect to each other.
#[derive(Clone)]
pub struct Repository {
    store: Arc<Mutex<RelationalStore>>,
}

impl Repository {
    /// Create a new repository owning the given store
    pub fn new(store: RelationalStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a read-only operation against the store
    pub fn read<T>(&self, op: impl FnOnce(&RelationalStore) -> T) -> AppResult<T> {
        let guard = self.lock()?;
        Ok(op(&*guard))
    }

    /// Run a mutating operation against the store
    pub fn write<T>(
        &self,
        op: impl FnOnce(&mut RelationalStore) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut guard = self.lock()?;
        op(&mut *guard)
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, RelationalStore>> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }
}
