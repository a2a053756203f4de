use crate::model::{MAX_PROGRESS, Status};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
};

use super::theme::theme;

/// Cells used by the textual progress bar.
const PROGRESS_CELLS: usize = 10;

/// Highlight search term in text by splitting into spans
pub fn highlight_search<'a>(text: &str, query: &str, base_style: Style) -> Vec<Span<'a>> {
    if query.is_empty() {
        return vec![Span::styled(text.to_string(), base_style)];
    }

    let t = theme();
    let lower_text = text.to_lowercase();
    let lower_query = query.to_lowercase();

    // Lowercasing can change byte lengths outside ASCII; skip highlighting then.
    if lower_text.len() != text.len() {
        return vec![Span::styled(text.to_string(), base_style)];
    }

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (idx, _) in lower_text.match_indices(&lower_query) {
        if idx > last_end {
            spans.push(Span::styled(text[last_end..idx].to_string(), base_style));
        }
        spans.push(Span::styled(
            text[idx..idx + lower_query.len()].to_string(),
            base_style
                .fg(t.modal_cursor)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
        last_end = idx + lower_query.len();
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }

    spans
}

/// Returns status icon and color
pub fn status_indicator(status: Status) -> (&'static str, Color) {
    theme().status_indicator(status)
}

/// Render a progress percentage as a bar of block characters.
pub fn progress_bar<'a>(progress: u8) -> Vec<Span<'a>> {
    let t = theme();
    let filled = usize::from(progress.min(MAX_PROGRESS)) * PROGRESS_CELLS / 100;
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(t.progress_filled)),
        Span::styled(
            "░".repeat(PROGRESS_CELLS - filled),
            Style::default().fg(t.progress_empty),
        ),
        Span::styled(format!(" {:>3}%", progress), Style::default().fg(t.text_muted)),
    ]
}

/// Join the first `limit` tags as `#tag` labels.
pub fn tag_labels(tags: &[String], limit: usize) -> String {
    tags.iter()
        .take(limit)
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Calculate a centered rectangle within a parent rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
