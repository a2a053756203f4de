//! # Nexus - A terminal roadmap board
//!
//! Nexus shows a product roadmap as a filterable list or a kanban board, and
//! can ask a Gemini model for new feature ideas that you accept one by one.
//!
//! ## Features
//!
//! - **Filtering**: search text plus category, status and target date filters
//! - **Kanban**: items grouped into Planned, In Progress, Released and Backlog
//! - **AI suggestions**: review generated ideas before they join the roadmap
//! - **TUI**: terminal user interface for interactive browsing
//!
//! ## Quick Start
//!
//! ```bash
//! # Show every item
//! nexus list
//!
//! # Only in-progress UI work
//! nexus board --status in-progress --category ui-ux
//!
//! # Ask for ideas and keep the first one
//! GEMINI_API_KEY=... nexus suggest "B2B analytics for retailers" --accept 1
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`filter`]: Filtering and status grouping
//! - [`model`]: Data models (RoadmapItem, Status, Category)
//! - [`storage`]: The in-memory roadmap collection and its seed data
//! - [`suggest`]: AI suggestion workflow
//! - [`tui`]: Terminal user interface
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.nexus.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `NexusError` enum and `Result<T>` type alias.
pub mod error;

pub mod filter;
pub mod logging;

/// Data models for roadmap items.
///
/// Includes `RoadmapItem`, `Status`, and `Category`.
pub mod model;

/// In-memory roadmap storage.
///
/// Holds the session's items, generates ids and loads seed data.
pub mod storage;

pub mod suggest;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui for browsing the roadmap.
pub mod tui;

/// Input validation utilities.
///
/// Validates titles, descriptions, IDs, and tags to prevent invalid data.
pub mod validation;
