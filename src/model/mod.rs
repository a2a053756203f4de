//! Data models for the roadmap.
//!
//! This module defines the core data structures:
//!
//! - [`RoadmapItem`]: A single roadmap entry
//! - [`Status`]: Delivery states (backlog, planned, in-progress, released)
//! - [`Category`]: Product areas (core platform, integrations, UI/UX, security, analytics)

mod item;
mod types;

pub use item::{AI_GENERATED_TAG, MAX_PROGRESS, RoadmapItem, TBD_DATE, coerce_progress};
pub use types::{Category, Status};
