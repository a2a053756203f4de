//! Input validation for roadmap data.

use crate::error::{NexusError, Result};
use crate::model::{MAX_PROGRESS, RoadmapItem};

/// Maximum allowed length for an item title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum allowed length for an item description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Maximum allowed length for an item ID.
pub const MAX_ID_LENGTH: usize = 50;

/// Maximum allowed length for a tag.
pub const MAX_TAG_LENGTH: usize = 50;

/// Validates an item title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NexusError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(NexusError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

/// Validates an item description.
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(NexusError::Validation(
            "Description cannot be empty".to_string(),
        ));
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(NexusError::Validation(format!(
            "Description exceeds maximum length of {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    Ok(())
}

/// Validates an item ID.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(NexusError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(NexusError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(NexusError::Validation(
            "ID cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validates a tag name.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(NexusError::Validation("Tag cannot be empty".to_string()));
    }
    if tag.len() > MAX_TAG_LENGTH {
        return Err(NexusError::Validation(format!(
            "Tag exceeds maximum length of {} characters",
            MAX_TAG_LENGTH
        )));
    }
    Ok(())
}

/// Validates every field of an item before it enters the collection.
pub fn validate_item(item: &RoadmapItem) -> Result<()> {
    validate_id(&item.id)?;
    validate_title(&item.title)?;
    validate_description(&item.description)?;
    for tag in &item.tags {
        validate_tag(tag)?;
    }
    if item.progress > MAX_PROGRESS {
        return Err(NexusError::Validation(format!(
            "Progress must be between 0 and {}",
            MAX_PROGRESS
        )));
    }
    Ok(())
}
