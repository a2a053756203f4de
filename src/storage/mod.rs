//! In-memory storage for roadmap items.
//!
//! Items live only for the duration of a session. A session starts from the
//! built-in seed set (or a seed file named in `.nexus.toml` / `--seed`) and only
//! grows when suggestions are accepted.
//!
//! ## Seed File Format
//!
//! ```yaml
//! - id: search
//!   title: Full text search
//!   description: Search across every workspace.
//!   status: PLANNED
//!   category: Core Platform
//!   date: Q3 2025
//!   tags: [Search]
//!   progress: 0
//! ```
//!
//! ## Components
//!
//! - [`Roadmap`]: The append-only master collection
//! - [`default_items`]: The built-in seed items

mod roadmap;
mod seed;

pub use roadmap::Roadmap;
pub use seed::default_items;
