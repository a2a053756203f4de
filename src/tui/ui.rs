use super::app::{App, InputMode, ViewMode};
use super::ui_modals::draw_suggest_modal;
use super::ui_views::{draw_filter_bar, draw_footer, draw_help_popup, draw_kanban, draw_list};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Active filters
            Constraint::Min(0),    // List or board
            Constraint::Length(1), // Footer (keybindings only)
        ])
        .split(f.area());

    draw_filter_bar(f, app, chunks[0]);
    match app.view_mode {
        ViewMode::List => draw_list(f, app, chunks[1]),
        ViewMode::Kanban => draw_kanban(f, app, chunks[1]),
    }
    draw_footer(f, app, chunks[2]);

    if app.show_help {
        draw_help_popup(f);
    }

    if app.input_mode == InputMode::Suggest {
        draw_suggest_modal(f, app);
    }
}
