use super::app::App;
use super::theme::theme;
use super::ui_utils;
use crate::suggest::IngestState;

use ratatui::{
    Frame,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// The AI ideas dialog: context input, request state, and pending candidates.
pub fn draw_suggest_modal(f: &mut Frame, app: &App) {
    let area = ui_utils::centered_rect(70, 70, f.area());
    let t = theme();
    let input_focused = app.suggest_selected.is_none();

    let input_display = if app.suggest_input.is_empty() {
        Span::styled(
            "e.g. A CRM for small bakeries that wants to grow online",
            Style::default().fg(t.text_muted),
        )
    } else {
        Span::raw(app.suggest_input.clone())
    };

    let mut content = vec![
        Line::from(Span::styled(
            "Describe your product or current focus:",
            Style::default().fg(t.text_muted),
        )),
        Line::from(vec![
            Span::styled(
                if input_focused { "▶ " } else { "  " },
                Style::default().fg(t.modal_cursor),
            ),
            input_display,
            if input_focused {
                Span::styled("_", Style::default().fg(t.modal_cursor))
            } else {
                Span::raw("")
            },
        ]),
        Line::from(""),
    ];

    match app.ingestor.state() {
        IngestState::Idle => {}
        IngestState::Requesting => content.push(Line::from(Span::styled(
            IngestState::Requesting.label(),
            Style::default()
                .fg(t.modal_border)
                .add_modifier(Modifier::SLOW_BLINK),
        ))),
        IngestState::Failed => {
            if let Some(failure) = app.ingestor.failure() {
                content.push(Line::from(Span::styled(
                    failure.message(),
                    Style::default().fg(t.error).add_modifier(Modifier::BOLD),
                )));
            }
        }
        IngestState::Succeeded => {
            let pending = app.ingestor.pending();
            let heading = if pending.is_empty() {
                "No ideas left to review.".to_string()
            } else {
                format!("Suggestions ({})", pending.len())
            };
            content.push(Line::from(Span::styled(
                heading,
                Style::default().fg(t.text).add_modifier(Modifier::BOLD),
            )));
        }
    }

    for (i, entry) in app.ingestor.pending().iter().enumerate() {
        let candidate = &entry.candidate;
        let is_selected = app.suggest_selected == Some(i);
        let row_style = if is_selected {
            Style::default().bg(t.modal_highlight_bg)
        } else {
            Style::default()
        };

        content.push(Line::from(""));
        content.push(
            Line::from(vec![
                Span::styled(
                    if is_selected { "▶ " } else { "  " },
                    Style::default().fg(t.modal_cursor),
                ),
                Span::styled(
                    candidate.title.clone(),
                    Style::default().fg(t.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", candidate.category_label()),
                    Style::default().fg(t.tags),
                ),
            ])
            .style(row_style),
        );
        content.push(
            Line::from(Span::styled(
                format!("  {}", candidate.description),
                Style::default().fg(t.text_muted),
            ))
            .style(row_style),
        );
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" ✦ AI Feature Ideas ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border_suggest)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
