//! Shared response body types for API handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// `{ "message": ... }` body for operations with nothing else to return.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
