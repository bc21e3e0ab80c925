//! Item (lendable / adoptable resource) model and related types.
//!
//! The generic field names map onto both domains: a book's title, author and
//! available copies, or a pet's name, species and age. Request bodies accept
//! the domain names as aliases.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Stored item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Item {
    pub id: i64,
    /// Title (books) or name (pets)
    pub name: String,
    /// Author (books) or species (pets)
    pub category: String,
    /// Available copies (books) or age (pets)
    pub quantity: i64,
    /// False once the item has been claimed (checked out / adopted)
    pub available: bool,
}

/// Create / update item request.
///
/// Every field is optional at the wire level; presence is checked by
/// [`ItemInput::into_fields`].
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ItemInput {
    #[serde(default, alias = "title")]
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[serde(default, alias = "author", alias = "species")]
    #[validate(
        required(message = "category is required"),
        length(min = 1, message = "category must not be empty")
    )]
    pub category: Option<String>,
    #[serde(default, alias = "availableCopies", alias = "age")]
    #[validate(
        required(message = "quantity is required"),
        range(min = 0, message = "quantity must be a non-negative integer")
    )]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub available: Option<bool>,
}

/// Validated item fields, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub available: Option<bool>,
}

impl ItemInput {
    /// Input with `available` left unset
    pub fn new(name: &str, category: &str, quantity: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            quantity: Some(quantity),
            available: None,
        }
    }

    /// Check presence and range rules and extract the typed fields
    pub fn into_fields(self) -> AppResult<ItemFields> {
        self.validate()?;
        match (self.name, self.category, self.quantity) {
            (Some(name), Some(category), Some(quantity)) => Ok(ItemFields {
                name,
                category,
                quantity,
                available: self.available,
            }),
            _ => Err(AppError::Validation(
                "name, category and quantity are required".to_string(),
            )),
        }
    }
}

/// Item list filter. All criteria are exact matches combined with AND.
///
/// Domain aliases collapse onto one criterion, so `?author=a&category=b`
/// filters on category `b`: the last occurrence wins.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Exact name (alias: title)
    pub name: Option<String>,
    /// Exact category (aliases: author, species)
    pub category: Option<String>,
    /// Availability flag
    pub available: Option<bool>,
}

impl ItemQuery {
    /// Build a filter from raw query pairs. Unrecognised keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> AppResult<Self> {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" | "title" => query.name = Some(value),
                "category" | "author" | "species" => query.category = Some(value),
                "available" => {
                    let flag = value.parse::<bool>().map_err(|_| {
                        AppError::InvalidArgument(format!(
                            "available must be true or false, got '{}'",
                            value
                        ))
                    })?;
                    query.available = Some(flag);
                }
                _ => {}
            }
        }
        Ok(query)
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.name.as_deref().map_or(true, |name| item.name == name)
            && self
                .category
                .as_deref()
                .map_or(true, |category| item.category == category)
            && self.available.map_or(true, |available| item.available == available)
    }
}
