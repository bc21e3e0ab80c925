//! Owner (borrower / adopter) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::item::Item;
use crate::error::{AppError, AppResult};

/// Stored owner record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Held item ids in association order; duplicates allowed
    pub held_item_ids: Vec<i64>,
}

/// Owner with held item ids resolved to item records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OwnerWithItems {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub items: Vec<Item>,
}

/// Create owner request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct OwnerInput {
    #[serde(default)]
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email must not be empty")
    )]
    pub email: Option<String>,
}

impl OwnerInput {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }

    /// Check presence rules and extract (name, email)
    pub fn into_fields(self) -> AppResult<(String, String)> {
        self.validate()?;
        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok((name, email)),
            _ => Err(AppError::Validation("name and email are required".to_string())),
        }
    }
}
