use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events inside the AI suggestion dialog.
///
/// With no candidate highlighted, keys edit the context input and Enter
/// submits it. Once a candidate is highlighted, Enter or `+` accepts it and
/// `-` or Delete discards it.
pub fn handle_suggest_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_suggest(),
        KeyCode::Down => app.next_candidate(),
        KeyCode::Up => app.previous_candidate(),
        KeyCode::Enter => {
            if app.suggest_selected.is_some() {
                app.accept_selected_candidate();
            } else if app.ingestor.can_submit(&app.suggest_input) {
                app.submit_suggestion();
            }
        }
        KeyCode::Char('+') if app.suggest_selected.is_some() => app.accept_selected_candidate(),
        KeyCode::Char('-') | KeyCode::Delete if app.suggest_selected.is_some() => {
            app.discard_selected_candidate()
        }
        KeyCode::Char(c) => {
            app.suggest_selected = None;
            app.suggest_input.push(c);
        }
        KeyCode::Backspace => {
            app.suggest_selected = None;
            app.suggest_input.pop();
        }
        _ => {}
    }

    false
}
