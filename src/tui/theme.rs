//! Central theme configuration for the TUI.
//!
//! All colors and styles are defined here to maintain consistency
//! and enable future theming capabilities.

use ratatui::style::{Color, Modifier, Style};

use crate::model::{Category, Status};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,
    pub selection_indicator: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_highlight: Color,

    // Status colors
    pub status_planned: Color,
    pub status_in_progress: Color,
    pub status_released: Color,
    pub status_backlog: Color,

    // Category colors
    pub category_core: Color,
    pub category_integrations: Color,
    pub category_ui: Color,
    pub category_security: Color,
    pub category_analytics: Color,

    pub id: Color,
    pub tags: Color,

    // Progress bar
    pub progress_filled: Color,
    pub progress_empty: Color,

    // Modal colors
    pub modal_border: Color,
    pub modal_border_suggest: Color,
    pub modal_cursor: Color,
    pub modal_highlight_bg: Color,
    pub error: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_search: (Color, Color),
    pub mode_suggest: (Color, Color),

    pub message: Color,

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Monokai color scheme
        // Based on classic Monokai: https://monokai.pro/
        Self {
            border: Color::Rgb(117, 113, 94),               // Muted brownish-gray
            border_focused: Color::Rgb(166, 226, 46),       // Monokai green
            selection_indicator: Color::Rgb(166, 226, 46),  // Monokai green

            text: Color::Rgb(248, 248, 242),           // Monokai foreground
            text_muted: Color::Rgb(117, 113, 94),      // Muted comment color
            text_highlight: Color::Rgb(248, 248, 242), // Bright foreground

            status_planned: Color::Rgb(102, 217, 239),     // Blue
            status_in_progress: Color::Rgb(230, 219, 116), // Yellow
            status_released: Color::Rgb(166, 226, 46),     // Green
            status_backlog: Color::Rgb(117, 113, 94),      // Muted

            category_core: Color::Rgb(102, 217, 239),         // Blue
            category_integrations: Color::Rgb(253, 151, 31),  // Orange
            category_ui: Color::Rgb(174, 129, 255),           // Purple
            category_security: Color::Rgb(249, 38, 114),      // Pink/red
            category_analytics: Color::Rgb(166, 226, 46),     // Green

            id: Color::Rgb(166, 226, 46),
            tags: Color::Rgb(174, 129, 255),

            progress_filled: Color::Rgb(102, 217, 239),
            progress_empty: Color::Rgb(73, 72, 62),

            modal_border: Color::Rgb(230, 219, 116),          // Yellow
            modal_border_suggest: Color::Rgb(174, 129, 255),  // Purple
            modal_cursor: Color::Rgb(102, 217, 239),          // Blue
            modal_highlight_bg: Color::Rgb(73, 72, 62),       // Slightly lighter than bg
            error: Color::Rgb(249, 38, 114),

            mode_normal: (Color::Rgb(102, 217, 239), Color::Rgb(39, 40, 34)), // Blue bg
            mode_search: (Color::Rgb(230, 219, 116), Color::Rgb(39, 40, 34)), // Yellow bg
            mode_suggest: (Color::Rgb(174, 129, 255), Color::Rgb(248, 248, 242)), // Purple bg

            message: Color::Rgb(166, 226, 46), // Green

            help_key: Color::Rgb(102, 217, 239),    // Blue
            help_border: Color::Rgb(230, 219, 116), // Yellow
        }
    }
}

impl Theme {
    /// Get status color
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Planned => self.status_planned,
            Status::InProgress => self.status_in_progress,
            Status::Released => self.status_released,
            Status::Backlog => self.status_backlog,
        }
    }

    /// Get status indicator (icon, color)
    pub fn status_indicator(&self, status: Status) -> (&'static str, Color) {
        let icon = match status {
            Status::Planned => "○",
            Status::InProgress => "◐",
            Status::Released => "●",
            Status::Backlog => "◌",
        };
        (icon, self.status_color(status))
    }

    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::CorePlatform => self.category_core,
            Category::Integrations => self.category_integrations,
            Category::UiUx => self.category_ui,
            Category::Security => self.category_security,
            Category::Analytics => self.category_analytics,
        }
    }

    // Style builders

    /// Style for selected rows and cards
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.modal_highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
