//! Item entity model and DTOs.

use items_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Item {
    #[schema(value_type = i64, example = 1)]
    pub id: DbId,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "A small widget")]
    pub description: String,
}

/// DTO for creating a new item.
///
/// `name` is optional at the wire level so that a missing name can be
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateItem {
    #[schema(example = "Widget")]
    pub name: Option<String>,
    /// Defaults to an empty string.
    #[schema(example = "A small widget")]
    pub description: Option<String>,
}

/// DTO for updating an existing item. Omitted (or `null`) fields keep their
/// stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateItem {
    /// True when neither field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
