use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nexus::{
    config::{DefaultView, NexusConfig},
    error::{NexusError, Result},
    filter::Selection,
    model::{AI_GENERATED_TAG, Category, Status, TBD_DATE},
    storage::Roadmap,
    suggest::{IngestState, SuggestionFailure, SuggestionProvider},
    tui::app::{App, InputMode, ViewMode, dispatch_key},
};
use serde_json::Value;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

const TWO_IDEAS: &str = r#"[
    {"title": "Offline Mode", "description": "Work without a connection.", "category": "Core Platform", "status": "PLANNED", "progress": 0},
    {"title": "Audit Log", "description": "Track every admin action.", "category": "Security", "status": "BACKLOG", "progress": 10}
]"#;

/// Provider double that answers every request with a fixed body
struct StubProvider {
    body: String,
    ready: bool,
    calls: AtomicUsize,
}

impl StubProvider {
    fn replying(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: body.to_string(),
            ready: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn without_key() -> Arc<Self> {
        Arc::new(Self {
            body: String::new(),
            ready: false,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl SuggestionProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.ready {
            Ok(())
        } else {
            Err(NexusError::MissingCredential {
                var: "GEMINI_API_KEY".to_string(),
            })
        }
    }

    async fn generate(&self, _prompt: &str, _schema: &Value) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

/// Helper to create a test app over the built-in seed items
fn create_test_app(provider: Arc<StubProvider>) -> App {
    let config = NexusConfig::default();
    App::with_provider(&config, Roadmap::seeded(9).unwrap(), provider).unwrap()
}

fn wait_for_reply(app: &mut App) {
    for _ in 0..500 {
        app.poll_suggestions();
        if !app.ingestor.is_busy() {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("suggestion request did not finish");
}

fn press(app: &mut App, code: KeyCode) {
    dispatch_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn visible_ids(app: &App) -> Vec<String> {
    app.visible_items().iter().map(|i| i.id.clone()).collect()
}

// ============================================================================
// Views and filters
// ============================================================================

#[test]
fn test_initial_state_shows_everything() {
    let app = create_test_app(StubProvider::replying("[]"));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.view_mode, ViewMode::List);
    assert_eq!(visible_ids(&app), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(app.dates, vec!["2023-10-15", "Q1 2024", "Q4 2023"]);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("1"));
}

#[test]
fn test_default_view_from_config() {
    let mut config = NexusConfig::default();
    config.tui.default_view = DefaultView::Kanban;
    let app =
        App::with_provider(&config, Roadmap::seeded(9).unwrap(), StubProvider::replying("[]")).unwrap();
    assert_eq!(app.view_mode, ViewMode::Kanban);
}

#[test]
fn test_toggle_view_mode() {
    let mut app = create_test_app(StubProvider::replying("[]"));
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.view_mode, ViewMode::Kanban);
    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.view_mode, ViewMode::List);
}

#[test]
fn test_search_mode_filters_while_typing() {
    let mut app = create_test_app(StubProvider::replying("[]"));

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode, InputMode::Search);
    type_text(&mut app, "MOBILE");
    assert_eq!(visible_ids(&app), vec!["2"]);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.criteria.search, "MOBIL");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(visible_ids(&app), vec!["2"]);

    // Esc in normal mode clears the search
    press(&mut app, KeyCode::Esc);
    assert!(app.criteria.search.is_empty());
    assert_eq!(app.visible.len(), 6);
}

#[test]
fn test_cycle_status_walks_every_value_then_all() {
    let mut app = create_test_app(StubProvider::replying("[]"));

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.criteria.status, Selection::Only(Status::Backlog));
    assert_eq!(visible_ids(&app), vec!["5"]);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.criteria.status, Selection::Only(Status::Planned));
    assert_eq!(visible_ids(&app), vec!["4", "6"]);

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.criteria.status, Selection::Only(Status::Released));

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.criteria.status, Selection::All);
}

#[test]
fn test_cycle_category_and_date_combine() {
    let mut app = create_test_app(StubProvider::replying("[]"));

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.criteria.category, Selection::Only(Category::CorePlatform));
    assert_eq!(visible_ids(&app), vec!["2", "6"]);

    press(&mut app, KeyCode::Char('d')); // 2023-10-15
    assert!(app.visible.is_empty());
    assert!(app.selected_item().is_none());

    press(&mut app, KeyCode::Char('d')); // Q1 2024
    assert_eq!(visible_ids(&app), vec!["6"]);

    press(&mut app, KeyCode::Char('x'));
    assert!(app.criteria.is_unfiltered());
    assert_eq!(app.visible.len(), 6);
}

#[test]
fn test_selection_clamps_when_filter_shrinks() {
    let mut app = create_test_app(StubProvider::replying("[]"));
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("6"));

    press(&mut app, KeyCode::Char('s')); // Backlog only
    assert_eq!(app.selected_index, 0);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("5"));
}

#[test]
fn test_list_navigation_wraps() {
    let mut app = create_test_app(StubProvider::replying("[]"));
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("6"));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("1"));
}

#[test]
fn test_kanban_navigation_stays_in_column() {
    let mut app = create_test_app(StubProvider::replying("[]"));
    press(&mut app, KeyCode::Char('v'));
    press(&mut app, KeyCode::Down); // 1 is alone in Released

    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("1"));

    // Released -> Backlog is the next column in board order
    press(&mut app, KeyCode::Right);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("5"));

    // Backlog wraps around to Planned
    press(&mut app, KeyCode::Right);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("4"));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("6"));

    press(&mut app, KeyCode::Left);
    assert_eq!(app.selected_item().map(|i| i.id.as_str()), Some("5"));
}

#[test]
fn test_quit_key() {
    let mut app = create_test_app(StubProvider::replying("[]"));
    let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert!(dispatch_key(&mut app, key));
}

// ============================================================================
// Suggestion dialog
// ============================================================================

#[test]
fn test_blank_context_does_not_submit() {
    let provider = StubProvider::replying(TWO_IDEAS);
    let mut app = create_test_app(provider.clone());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, InputMode::Suggest);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.ingestor.state(), IngestState::Idle);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_enter_while_requesting_sends_one_request() {
    let provider = StubProvider::replying(TWO_IDEAS);
    let mut app = create_test_app(Arc::clone(&provider));

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Fleet tracking");
    press(&mut app, KeyCode::Enter);
    assert!(app.ingestor.is_busy());
    press(&mut app, KeyCode::Enter);

    wait_for_reply(&mut app);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.ingestor.pending().len(), 2);
}

#[test]
fn test_missing_key_fails_without_request() {
    let provider = StubProvider::without_key();
    let mut app = create_test_app(provider.clone());

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "fintech app");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.ingestor.state(), IngestState::Failed);
    assert_eq!(
        app.ingestor.failure(),
        Some(&SuggestionFailure::MissingCredential {
            var: "GEMINI_API_KEY".to_string()
        })
    );
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_accept_one_candidate_then_close() {
    let mut app = create_test_app(StubProvider::replying(TWO_IDEAS));

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "project management tool");
    press(&mut app, KeyCode::Enter);
    wait_for_reply(&mut app);

    assert_eq!(app.ingestor.state(), IngestState::Succeeded);
    assert_eq!(app.ingestor.pending().len(), 2);
    assert_eq!(app.roadmap.len(), 6);

    // Highlight the second idea and accept it with '+'
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.suggest_selected, Some(1));
    press(&mut app, KeyCode::Char('+'));

    assert_eq!(app.roadmap.len(), 7);
    let added = &app.roadmap.items()[6];
    assert_eq!(added.title, "Audit Log");
    assert_eq!(added.status, Status::Backlog);
    assert_eq!(added.progress, 10);
    assert_eq!(added.tags, vec![AI_GENERATED_TAG.to_string()]);
    assert_eq!(added.date.as_deref(), Some(TBD_DATE));
    assert_eq!(app.ingestor.pending().len(), 1);
    assert_eq!(app.suggest_selected, Some(0));

    // The new item is visible and its date joins the choices
    assert_eq!(app.visible.len(), 7);
    assert!(app.dates.contains(&TBD_DATE.to_string()));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.ingestor.pending().is_empty());
    assert_eq!(app.roadmap.len(), 7);
}

#[test]
fn test_discard_candidate_leaves_roadmap_untouched() {
    let mut app = create_test_app(StubProvider::replying(TWO_IDEAS));

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "crm");
    press(&mut app, KeyCode::Enter);
    wait_for_reply(&mut app);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.ingestor.pending().len(), 1);
    assert_eq!(app.ingestor.pending()[0].candidate.title, "Audit Log");
    assert_eq!(app.roadmap.len(), 6);
}

#[test]
fn test_typing_returns_focus_to_input() {
    let mut app = create_test_app(StubProvider::replying(TWO_IDEAS));

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "crm");
    press(&mut app, KeyCode::Enter);
    wait_for_reply(&mut app);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.suggest_selected, Some(0));
    press(&mut app, KeyCode::Up);
    assert_eq!(app.suggest_selected, None);

    // '+' goes into the text when the input has focus
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.suggest_input, "crm+");
    assert_eq!(app.roadmap.len(), 6);
}

#[test]
fn test_malformed_reply_shows_generic_failure() {
    let mut app = create_test_app(StubProvider::replying("{\"title\": \"not a list\"}"));

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "crm");
    press(&mut app, KeyCode::Enter);
    wait_for_reply(&mut app);

    assert_eq!(app.ingestor.state(), IngestState::Failed);
    assert_eq!(app.ingestor.failure(), Some(&SuggestionFailure::Request));
    assert!(app.ingestor.pending().is_empty());
}

#[test]
fn test_reply_after_close_is_discarded() {
    let mut app = create_test_app(StubProvider::replying(TWO_IDEAS));

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "crm");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);

    wait_for_reply(&mut app);
    assert!(app.ingestor.pending().is_empty());
    assert_eq!(app.roadmap.len(), 6);
}
