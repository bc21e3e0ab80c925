//! Lending Server
//!
//! An in-memory lending service: a catalog of items (books or pets) and the
//! owners (borrowers or adopters) who hold them, served as a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{RelationalStore, Repository};
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state with a fresh store, seeded per configuration
    pub fn new(config: AppConfig) -> Self {
        let store = if config.store.seed {
            RelationalStore::seeded(config.store.domain)
        } else {
            RelationalStore::new()
        };
        Self {
            services: Arc::new(Services::new(Repository::new(store))),
            config: Arc::new(config),
        }
    }
}
