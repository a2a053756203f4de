use super::app::{App, InputMode, ViewMode};
use super::theme::theme;
use super::ui_utils;
use crate::filter::group_by_status;
use crate::model::RoadmapItem;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

/// Tags shown per row in the list view.
const LIST_TAG_LIMIT: usize = 3;

/// Tags shown per card on the board.
const CARD_TAG_LIMIT: usize = 2;

pub fn draw_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let label = Style::default().fg(t.text_muted);
    let value = Style::default()
        .fg(t.text_highlight)
        .add_modifier(Modifier::BOLD);
    let sep = Span::styled(" │ ", Style::default().fg(t.border));

    let mut spans = vec![
        Span::styled(" Category: ", label),
        Span::styled(app.criteria.category.to_string(), value),
        sep.clone(),
        Span::styled("Status: ", label),
        Span::styled(app.criteria.status.to_string(), value),
        sep.clone(),
        Span::styled("Date: ", label),
        Span::styled(app.criteria.date.to_string(), value),
    ];
    if !app.criteria.search.is_empty() {
        spans.push(sep.clone());
        spans.push(Span::styled("Search: ", label));
        spans.push(Span::styled(format!("\"{}\"", app.criteria.search), value));
    }
    spans.push(sep);
    spans.push(Span::styled(
        format!(
            "{} of {} items · {} view",
            app.visible.len(),
            app.roadmap.len(),
            app.view_mode.label()
        ),
        label,
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn empty_notice(f: &mut Frame, area: Rect, block: Block, text: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(theme().text_muted),
    )))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(paragraph, area);
}

pub fn draw_list(f: &mut Frame, app: &mut App, area: Rect) {
    let t = theme();
    let block = Block::default()
        .title(format!(" Nexus Roadmap ({}) ", app.visible.len()))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(t.border_style(app.input_mode == InputMode::Normal));

    if app.visible.is_empty() {
        empty_notice(f, area, block, "No items match your filters.");
        return;
    }

    let query = app.criteria.search.clone();
    let selected = app.selected_index;
    let rows: Vec<Row> = app
        .visible_items()
        .into_iter()
        .enumerate()
        .map(|(i, item)| list_row(item, &query, i == selected))
        .collect();

    let header = Row::new(vec!["", "Feature", "Status", "Category", "Date", "Progress"])
        .style(Style::default().fg(t.text_muted).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(1),  // Selection indicator
        Constraint::Fill(1),    // Title, description and tags
        Constraint::Length(14), // Status (icon + text)
        Constraint::Length(14), // Category
        Constraint::Length(11), // Date
        Constraint::Length(15), // Progress bar
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(t.selected_style());

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn list_row<'a>(item: &RoadmapItem, query: &str, is_selected: bool) -> Row<'a> {
    let t = theme();
    let (status_icon, status_color) = ui_utils::status_indicator(item.status);

    let title_style = Style::default().fg(t.text).add_modifier(Modifier::BOLD);
    let mut title_line = ui_utils::highlight_search(&item.title, query, title_style);
    if !item.tags.is_empty() {
        title_line.push(Span::styled(
            format!("  {}", ui_utils::tag_labels(&item.tags, LIST_TAG_LIMIT)),
            Style::default().fg(t.tags),
        ));
    }
    let description_line = ui_utils::highlight_search(
        &item.description,
        query,
        Style::default().fg(t.text_muted),
    );

    let (sel, sel_style) = if is_selected {
        ("▌", Style::default().fg(t.selection_indicator))
    } else {
        (" ", Style::default())
    };

    Row::new(vec![
        Cell::from(sel).style(sel_style),
        Cell::from(Text::from(vec![
            Line::from(title_line),
            Line::from(description_line),
        ])),
        Cell::from(format!("{} {}", status_icon, item.status.label()))
            .style(Style::default().fg(status_color)),
        Cell::from(item.category.to_string())
            .style(Style::default().fg(t.category_color(item.category))),
        Cell::from(item.date_label().to_string()).style(Style::default().fg(t.text_muted)),
        Cell::from(Line::from(ui_utils::progress_bar(item.progress))),
    ])
    .height(2)
}

pub fn draw_kanban(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let selected_id = app.selected_item().map(|item| item.id.clone());
    let query = app.criteria.search.as_str();
    let items = app.visible_items();
    let board = group_by_status(items.iter().copied());

    for (column_area, (status, bucket)) in columns.iter().zip(board.columns()) {
        let (icon, color) = ui_utils::status_indicator(status);
        let selected_row = bucket
            .iter()
            .position(|item| Some(&item.id) == selected_id.as_ref());

        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color)),
                Span::styled(
                    status.label(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({}) ", bucket.len()),
                    Style::default().fg(t.text_muted),
                ),
            ]))
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(t.border_style(selected_row.is_some()));

        if bucket.is_empty() {
            empty_notice(f, *column_area, block, "No items yet");
            continue;
        }

        let cards: Vec<ListItem> = bucket.iter().map(|item| card(item, query)).collect();
        let list = List::new(cards)
            .block(block)
            .highlight_style(t.selected_style());
        let mut state = ListState::default().with_selected(selected_row);
        f.render_stateful_widget(list, *column_area, &mut state);
    }
}

fn card<'a>(item: &RoadmapItem, query: &str) -> ListItem<'a> {
    let t = theme();
    let title_style = Style::default().fg(t.text).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(ui_utils::highlight_search(&item.title, query, title_style)),
        Line::from(vec![
            Span::styled(
                item.category.to_string(),
                Style::default().fg(t.category_color(item.category)),
            ),
            Span::styled(
                format!(" · {}", item.date_label()),
                Style::default().fg(t.text_muted),
            ),
        ]),
    ];
    if !item.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            ui_utils::tag_labels(&item.tags, CARD_TAG_LIMIT),
            Style::default().fg(t.tags),
        )));
    }
    lines.push(Line::from(ui_utils::progress_bar(item.progress)));
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    // Mode indicator - use theme colors
    let t = theme();
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().bg(t.mode_normal.0).fg(t.mode_normal.1),
        ),
        InputMode::Search => Span::styled(
            " SEARCH ",
            Style::default().bg(t.mode_search.0).fg(t.mode_search.1),
        ),
        InputMode::Suggest => Span::styled(
            " AI ",
            Style::default().bg(t.mode_suggest.0).fg(t.mode_suggest.1),
        ),
    };

    let help_text = match app.input_mode {
        InputMode::Normal => match app.view_mode {
            ViewMode::List => {
                " ↑↓:nav  /:search  c/s/d:filter  x:reset  v:board  a:AI ideas  y:copy-id  ?:help  q:quit "
            }
            ViewMode::Kanban => {
                " ↑↓:nav  ←→:column  /:search  c/s/d:filter  x:reset  v:list  a:AI ideas  ?:help  q:quit "
            }
        },
        InputMode::Search => " Type to search, Enter/Esc to confirm ",
        InputMode::Suggest => " Enter:generate/accept  ↑↓:select  +:accept  -:discard  Esc:close ",
    };

    let mut footer_spans = vec![mode_indicator];

    // Show search input when in Search mode
    if app.input_mode == InputMode::Search {
        footer_spans.push(Span::raw(" Search: "));
        footer_spans.push(Span::styled(
            app.criteria.search.as_str(),
            Style::default().fg(t.text_highlight),
        ));
        footer_spans.push(Span::styled("_", Style::default().fg(t.modal_cursor)));
        footer_spans.push(Span::raw(" "));
    }

    if let Some(ref msg) = app.message {
        footer_spans.push(Span::raw(" "));
        footer_spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(t.message).add_modifier(Modifier::BOLD),
        ));
    }

    footer_spans.push(Span::styled(help_text, Style::default().fg(t.text_muted)));

    let keybindings = Paragraph::new(Line::from(footer_spans));
    f.render_widget(keybindings, area);
}

pub fn draw_help_popup(f: &mut Frame) {
    let area = ui_utils::centered_rect(60, 70, f.area());
    let t = theme();
    let key_style = Style::default().fg(t.help_key);
    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default().add_modifier(Modifier::UNDERLINED),
        ))
    };
    let binding = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<8}", key), key_style),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Navigation"),
        binding("↑/↓", "Move up/down"),
        binding("←/→", "Previous/next column (board)"),
        binding("v", "Toggle list/board view"),
        binding("/", "Search titles and descriptions"),
        Line::from(""),
        section("Filters"),
        binding("c", "Cycle category"),
        binding("s", "Cycle status"),
        binding("d", "Cycle target date"),
        binding("x", "Reset all filters"),
        Line::from(""),
        section("Actions"),
        binding("a", "Generate ideas with AI"),
        binding("y", "Copy ID to clipboard"),
        Line::from(""),
        binding("?", "Toggle help"),
        binding("Esc", "Close / Cancel"),
        binding("q", "Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.help_border)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
