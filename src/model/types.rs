use crate::error::{NexusError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Backlog,
    #[default]
    Planned,
    InProgress,
    Released,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 4] = [
        Status::Backlog,
        Status::Planned,
        Status::InProgress,
        Status::Released,
    ];

    /// Column order of the kanban board.
    pub const BOARD_ORDER: [Status; 4] = [
        Status::Planned,
        Status::InProgress,
        Status::Released,
        Status::Backlog,
    ];

    /// Human readable label used in headers and tables.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::Planned => "Planned",
            Status::InProgress => "In Progress",
            Status::Released => "Released",
        }
    }

    /// Match an exact wire label, falling back to [`Status::Planned`] for anything else.
    ///
    /// Unlike `FromStr` this accepts no aliases and is case-sensitive.
    pub fn coerce(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|status| status.to_string() == raw)
            .unwrap_or_default()
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Status::Backlog => 0,
            Status::Planned => 1,
            Status::InProgress => 2,
            Status::Released => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Backlog => write!(f, "BACKLOG"),
            Status::Planned => write!(f, "PLANNED"),
            Status::InProgress => write!(f, "IN_PROGRESS"),
            Status::Released => write!(f, "RELEASED"),
        }
    }
}

impl FromStr for Status {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "backlog" => Ok(Status::Backlog),
            "planned" => Ok(Status::Planned),
            "in_progress" | "in-progress" | "in progress" | "inprogress" => Ok(Status::InProgress),
            "released" => Ok(Status::Released),
            _ => Err(NexusError::Parse(format!("Invalid status: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Core Platform")]
    CorePlatform,
    #[serde(rename = "Integrations")]
    Integrations,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Security")]
    Security,
    #[serde(rename = "Analytics")]
    Analytics,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CorePlatform,
        Category::Integrations,
        Category::UiUx,
        Category::Security,
        Category::Analytics,
    ];

    /// Match an exact wire label, falling back to [`Category::CorePlatform`] for anything else.
    pub fn coerce(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.to_string() == raw)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::CorePlatform => write!(f, "Core Platform"),
            Category::Integrations => write!(f, "Integrations"),
            Category::UiUx => write!(f, "UI/UX"),
            Category::Security => write!(f, "Security"),
            Category::Analytics => write!(f, "Analytics"),
        }
    }
}

impl FromStr for Category {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "core platform" | "core" | "core-platform" => Ok(Category::CorePlatform),
            "integrations" | "integration" => Ok(Category::Integrations),
            "ui/ux" | "uiux" | "ui" | "ux" => Ok(Category::UiUx),
            "security" => Ok(Category::Security),
            "analytics" => Ok(Category::Analytics),
            _ => Err(NexusError::Parse(format!("Invalid category: {}", s))),
        }
    }
}
