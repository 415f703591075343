//! Field rules for the `Item` resource.
//!
//! Handlers call these before touching the database so that a bad request
//! is rejected with a readable message instead of a constraint violation.

use crate::error::CoreError;

/// Entity name used in `CoreError::NotFound` for items.
pub const ENTITY: &str = "Item";

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of an item description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Ensure a name was supplied at all, then validate it.
pub fn require_name(name: Option<&str>) -> Result<&str, CoreError> {
    let name = name.ok_or_else(|| CoreError::Validation("Name is required".into()))?;
    validate_name(name)?;
    Ok(name)
}

/// Reject blank names and names over [`MAX_NAME_LEN`].
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Reject descriptions over [`MAX_DESCRIPTION_LEN`]; empty is allowed.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// An update must carry at least one field.
pub fn require_any_field(has_name: bool, has_description: bool) -> Result<(), CoreError> {
    if !has_name && !has_description {
        return Err(CoreError::Validation("No data provided".into()));
    }
    Ok(())
}
