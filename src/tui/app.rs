use super::{handlers, ui};
use crate::{
    config::{DefaultView, NexusConfig},
    error::{NexusError, Result},
    filter::{FilterCriteria, available_dates, matches},
    model::{Category, RoadmapItem, Status},
    storage::Roadmap,
    suggest::{GeminiProvider, SuggestionIngestor, SuggestionProvider, response_schema},
};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::TableState};
use std::{
    io,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    time::Duration,
};

/// How long the event loop waits for input before checking for replies.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Suggest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Kanban,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Kanban => "Kanban",
        }
    }
}

impl From<DefaultView> for ViewMode {
    fn from(view: DefaultView) -> Self {
        match view {
            DefaultView::List => ViewMode::List,
            DefaultView::Kanban => ViewMode::Kanban,
        }
    }
}

pub struct App {
    pub roadmap: Roadmap,
    pub criteria: FilterCriteria,
    /// Indices into `roadmap.items()` that pass the current filter
    pub visible: Vec<usize>,
    pub dates: Vec<String>,
    pub selected_index: usize,
    pub table_state: TableState,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub message: Option<String>,

    // Suggestion dialog
    pub ingestor: SuggestionIngestor,
    pub suggest_input: String,
    /// Highlighted candidate; `None` while the text input has focus
    pub suggest_selected: Option<usize>,
    provider: Arc<dyn SuggestionProvider>,
    runtime: tokio::runtime::Runtime,
    reply_tx: Sender<Result<String>>,
    reply_rx: Receiver<Result<String>>,
}

impl App {
    pub fn new(config: &NexusConfig, roadmap: Roadmap) -> Result<Self> {
        let provider = GeminiProvider::from_settings(&config.suggest)?;
        Self::with_provider(config, roadmap, Arc::new(provider))
    }

    /// Build an app around any suggestion backend.
    pub fn with_provider(
        config: &NexusConfig,
        roadmap: Roadmap,
        provider: Arc<dyn SuggestionProvider>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (reply_tx, reply_rx) = mpsc::channel();

        let mut app = Self {
            roadmap,
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            dates: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            view_mode: config.tui.default_view.into(),
            input_mode: InputMode::Normal,
            show_help: false,
            message: None,
            ingestor: SuggestionIngestor::new(),
            suggest_input: String::new(),
            suggest_selected: None,
            provider,
            runtime,
            reply_tx,
            reply_rx,
        };
        app.refresh_dates();
        app.apply_filter();
        Ok(app)
    }

    /// Items passing the current filter, in collection order.
    pub fn visible_items(&self) -> Vec<&RoadmapItem> {
        let items = self.roadmap.items();
        self.visible.iter().map(|&i| &items[i]).collect()
    }

    pub fn apply_filter(&mut self) {
        self.visible = self
            .roadmap
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| matches(item, &self.criteria))
            .map(|(i, _)| i)
            .collect();
        tracing::debug!(visible = self.visible.len(), "Recomputed visible items");

        if self.visible.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.visible.len() {
                self.selected_index = self.visible.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn refresh_dates(&mut self) {
        self.dates = available_dates(self.roadmap.items());
    }

    pub fn selected_item(&self) -> Option<&RoadmapItem> {
        self.visible
            .get(self.selected_index)
            .map(|&i| &self.roadmap.items()[i])
    }

    fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.table_state.select(Some(index));
    }

    /// Move the selection by one. On the board this stays inside the column.
    fn step(&mut self, forward: bool) {
        let count = self.visible.len();
        if count == 0 {
            return;
        }
        let column = match self.view_mode {
            ViewMode::List => None,
            ViewMode::Kanban => self.selected_item().map(|item| item.status),
        };
        let mut index = self.selected_index;
        for _ in 0..count {
            index = if forward {
                (index + 1) % count
            } else {
                (index + count - 1) % count
            };
            let status = self.roadmap.items()[self.visible[index]].status;
            if column.is_none_or(|c| c == status) {
                self.select(index);
                return;
            }
        }
    }

    pub fn next(&mut self) {
        self.step(true);
    }

    pub fn previous(&mut self) {
        self.step(false);
    }

    /// Jump to the first item of the next (or previous) non-empty board column.
    pub fn move_column(&mut self, forward: bool) {
        let Some(current) = self.selected_item().map(|item| item.status) else {
            return;
        };
        let order = Status::BOARD_ORDER;
        let Some(position) = order.iter().position(|s| *s == current) else {
            return;
        };
        for offset in 1..order.len() {
            let target = if forward {
                order[(position + offset) % order.len()]
            } else {
                order[(position + order.len() - offset) % order.len()]
            };
            let found = self
                .visible
                .iter()
                .position(|&i| self.roadmap.items()[i].status == target);
            if let Some(index) = found {
                self.select(index);
                return;
            }
        }
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::List => ViewMode::Kanban,
            ViewMode::Kanban => ViewMode::List,
        };
        self.message = Some(format!("{} view", self.view_mode.label()));
    }

    pub fn cycle_category(&mut self) {
        self.criteria.category = self.criteria.category.next_in(&Category::ALL);
        self.apply_filter();
    }

    pub fn cycle_status(&mut self) {
        self.criteria.status = self.criteria.status.next_in(&Status::ALL);
        self.apply_filter();
    }

    pub fn cycle_date(&mut self) {
        self.criteria.date = self.criteria.date.next_in(&self.dates);
        self.apply_filter();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.apply_filter();
        self.message = Some("Filters cleared".to_string());
    }

    pub fn copy_selected_id(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id.clone()) else {
            return;
        };
        let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(&id));
        self.message = Some(match copied {
            Ok(()) => format!("Copied: {}", id),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard not available");
                "Clipboard not available".to_string()
            }
        });
    }

    // Suggestion dialog

    pub fn open_suggest(&mut self) {
        self.input_mode = InputMode::Suggest;
        self.suggest_selected = None;
    }

    /// Close the dialog, dropping every candidate that was not accepted.
    pub fn close_suggest(&mut self) {
        self.ingestor.discard_all();
        self.suggest_selected = None;
        self.input_mode = InputMode::Normal;
    }

    /// Submit the typed context. Ignored while a request is in flight or
    /// when the context is blank.
    pub fn submit_suggestion(&mut self) {
        let Some(prompt) = self.ingestor.begin(&self.suggest_input) else {
            return;
        };
        self.suggest_selected = None;

        if let Err(err) = self.provider.ensure_ready() {
            self.ingestor.resolve(Err(err));
            return;
        }

        let provider = Arc::clone(&self.provider);
        let reply_tx = self.reply_tx.clone();
        self.runtime.spawn(async move {
            let schema = response_schema();
            let reply = provider.generate(&prompt, &schema).await;
            // The app may have quit in the meantime.
            let _ = reply_tx.send(reply);
        });
    }

    /// Deliver a finished request, if any, to the ingestor.
    pub fn poll_suggestions(&mut self) {
        let reply = match self.reply_rx.try_recv() {
            Ok(reply) => reply,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => Err(NexusError::ProviderRequest(
                "Suggestion worker stopped".to_string(),
            )),
        };
        self.ingestor.resolve(reply);
        if self.input_mode != InputMode::Suggest {
            // The dialog was closed while the request was running.
            self.ingestor.discard_all();
        }
    }

    pub fn next_candidate(&mut self) {
        let count = self.ingestor.pending().len();
        self.suggest_selected = match self.suggest_selected {
            _ if count == 0 => None,
            None => Some(0),
            Some(i) => Some((i + 1).min(count - 1)),
        };
    }

    /// Move up the candidate list; above the first one focus returns to the input.
    pub fn previous_candidate(&mut self) {
        self.suggest_selected = match self.suggest_selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    fn selected_ticket(&self) -> Option<crate::suggest::CandidateTicket> {
        self.suggest_selected
            .and_then(|i| self.ingestor.pending().get(i))
            .map(|p| p.ticket)
    }

    fn clamp_candidate_selection(&mut self) {
        let count = self.ingestor.pending().len();
        self.suggest_selected = match self.suggest_selected {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }

    pub fn accept_selected_candidate(&mut self) {
        let Some(ticket) = self.selected_ticket() else {
            return;
        };
        match self.ingestor.accept(ticket, &mut self.roadmap) {
            Ok(item) => {
                self.message = Some(format!("Added: {}", item.title));
            }
            Err(e) => {
                self.message = Some(format!("Could not add suggestion: {}", e));
            }
        }
        self.clamp_candidate_selection();
        self.refresh_dates();
        self.apply_filter();
    }

    pub fn discard_selected_candidate(&mut self) {
        let Some(ticket) = self.selected_ticket() else {
            return;
        };
        if self.ingestor.discard(ticket).is_ok() {
            self.clamp_candidate_selection();
        }
    }
}

/// Route a key press to the handler for the current mode.
/// Returns true if the application should quit
pub fn dispatch_key(app: &mut App, key: KeyEvent) -> bool {
    // Messages live until the next key press.
    app.message = None;

    match app.input_mode {
        InputMode::Normal => handlers::handle_normal_mode(app, key),
        InputMode::Search => handlers::handle_search_mode(app, key),
        InputMode::Suggest => handlers::handle_suggest_mode(app, key),
    }
}

pub fn run_tui(config: NexusConfig, roadmap: Roadmap) -> Result<()> {
    let mut app = App::new(&config, roadmap)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && dispatch_key(app, key)
        {
            return Ok(());
        }

        app.poll_suggestions();
    }
}
