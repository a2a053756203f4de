use crate::error::{NexusError, Result};
use crate::model::{
    AI_GENERATED_TAG, Category, RoadmapItem, Status, TBD_DATE, coerce_progress,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An unvalidated suggestion as returned by the provider.
///
/// Title and description must be present as strings. The remaining fields are
/// kept as raw JSON and coerced only when the candidate is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub category: Value,

    #[serde(default)]
    pub status: Value,

    #[serde(default)]
    pub progress: Value,
}

impl Candidate {
    /// Category label as sent by the provider, if it was a string.
    pub fn category_label(&self) -> &str {
        self.category.as_str().unwrap_or("")
    }

    pub fn status_label(&self) -> &str {
        self.status.as_str().unwrap_or("")
    }

    /// Convert into a well-formed item carrying the given id.
    pub fn normalize(&self, id: String) -> RoadmapItem {
        RoadmapItem::new(id, self.title.trim(), self.description.trim())
            .with_category(Category::coerce(self.category_label()))
            .with_status(Status::coerce(self.status_label()))
            .with_progress(coerce_progress(&self.progress))
            .with_tags([AI_GENERATED_TAG])
            .with_date(TBD_DATE)
    }
}

/// Parse a provider response body into candidates.
///
/// The body must be a JSON array of objects, each with non-blank string
/// `title` and `description`. Anything else fails as a whole; there is no
/// partial recovery.
pub fn parse_candidates(body: &str) -> Result<Vec<Candidate>> {
    if body.trim().is_empty() {
        return Err(NexusError::ProviderRequest("Empty response".to_string()));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| NexusError::ProviderRequest(format!("Response is not JSON: {}", e)))?;
    let Value::Array(entries) = value else {
        return Err(NexusError::ProviderRequest(
            "Response is not a JSON array".to_string(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(NexusError::ProviderRequest(format!(
                    "Suggestion {} is not an object",
                    index
                )));
            }
            let candidate: Candidate = serde_json::from_value(entry).map_err(|e| {
                NexusError::ProviderRequest(format!("Suggestion {} is malformed: {}", index, e))
            })?;
            if candidate.title.trim().is_empty() || candidate.description.trim().is_empty() {
                return Err(NexusError::ProviderRequest(format!(
                    "Suggestion {} has an empty title or description",
                    index
                )));
            }
            Ok(candidate)
        })
        .collect()
}
