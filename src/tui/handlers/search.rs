use crate::tui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle Search mode key events; the filter updates on every keystroke.
pub fn handle_search_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.criteria.search.push(c);
            app.apply_filter();
        }
        KeyCode::Backspace => {
            app.criteria.search.pop();
            app.apply_filter();
        }
        _ => {}
    }

    false
}
