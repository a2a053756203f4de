use super::types::{Category, Status};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag attached to every item that came out of the suggestion flow.
pub const AI_GENERATED_TAG: &str = "AI Generated";

/// Date label for items without a target date yet.
pub const TBD_DATE: &str = "TBD";

/// Upper bound of [`RoadmapItem::progress`].
pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub progress: u8,
}

impl RoadmapItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: Status::default(),
            category: Category::default(),
            date: None,
            tags: Vec::new(),
            progress: 0,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(MAX_PROGRESS);
        self
    }

    /// Date label for display, `TBD` when unset.
    pub fn date_label(&self) -> &str {
        self.date.as_deref().unwrap_or(TBD_DATE)
    }
}

/// Coerce an arbitrary JSON value into a progress percentage.
///
/// Only integers within `0..=100` survive; everything else (missing, strings,
/// fractional numbers, out of range) becomes `0`.
pub fn coerce_progress(raw: &Value) -> u8 {
    raw.as_u64()
        .filter(|p| *p <= MAX_PROGRESS as u64)
        .map(|p| p as u8)
        .unwrap_or(0)
}
