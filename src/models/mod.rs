//! Data models for the lending server

pub mod domain;
pub mod item;
pub mod owner;

// Re-export commonly used types
pub use domain::Domain;
pub use item::{Item, ItemFields, ItemInput, ItemQuery};
pub use owner::{Owner, OwnerInput, OwnerWithItems};
