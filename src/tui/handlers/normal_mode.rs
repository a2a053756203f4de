use crate::tui::app::{App, InputMode, ViewMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle Normal mode key events
/// Returns true if the application should quit
pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else if !app.criteria.search.is_empty() {
                app.criteria.search.clear();
                app.apply_filter();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Right | KeyCode::Char('l') if app.view_mode == ViewMode::Kanban => {
            app.move_column(true)
        }
        KeyCode::Left | KeyCode::Char('h') if app.view_mode == ViewMode::Kanban => {
            app.move_column(false)
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('v') => app.toggle_view_mode(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('s') => app.cycle_status(),
        KeyCode::Char('d') => app.cycle_date(),
        KeyCode::Char('x') => app.reset_filters(),
        KeyCode::Char('a') => app.open_suggest(),
        KeyCode::Char('y') => app.copy_selected_id(),
        _ => {}
    }

    false
}
