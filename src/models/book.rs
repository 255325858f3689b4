//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::strip_reserved;

/// Wire names of the typed `Book` fields; never allowed inside `details`
pub const BOOK_FIELDS: &[&str] = &["id", "book_category", "book_quantity"];

/// Book as stored in the catalog and served by `GET /book/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: Uuid,
    /// Category tag the book is listed under
    #[serde(default)]
    pub book_category: String,
    /// Copies on the shelf, never negative
    #[serde(default)]
    pub book_quantity: i32,
    /// Descriptive fields (name, author, image, rating, ...) kept as sent
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub book_category: String,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub book_quantity: i32,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
}

impl NewBook {
    /// Remove payload keys that collide with typed book fields
    pub fn without_reserved_keys(mut self) -> Self {
        strip_reserved(&mut self.details, BOOK_FIELDS);
        self
    }
}

/// Quantity update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateQuantity {
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub book_quantity: i32,
}

/// Catalog filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    pub category: Option<String>,
}

impl BookQuery {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }
}
