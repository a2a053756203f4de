//! Terminal user interface for nexus.
//!
//! An interactive TUI built with ratatui for browsing the roadmap.
//!
//! ## Usage
//!
//! ```bash
//! nexus tui
//! ```
//!
//! ## Keybindings
//!
//! - `↑/↓`: Navigate up/down
//! - `←/→`: Previous/next column on the board
//! - `v`: Toggle list/kanban view
//! - `/`: Search
//! - `c` / `s` / `d`: Cycle category, status and date filters
//! - `x`: Reset filters
//! - `a`: Generate feature ideas with AI
//! - `y`: Copy ID to clipboard
//! - `?`: Help
//! - `q`: Quit

pub mod app;
mod handlers;
pub mod theme;
mod ui;
mod ui_modals;
mod ui_utils;
mod ui_views;

pub use app::run_tui;
