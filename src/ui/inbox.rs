//! Inbox view: mail list with an optional preview pane

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::theme::Theme;
use super::widgets::{error_bar, format_date, help_bar, sanitize_text, truncate_string};
use crate::app::state::AppState;
use crate::constants::MIN_SPLIT_VIEW_WIDTH;

pub fn render_inbox(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(0),    // List (+ preview)
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    super::status_bar::status_bar(frame, chunks[0], state);

    // Split view only when the terminal is wide enough
    if frame.area().width >= MIN_SPLIT_VIEW_WIDTH {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(state.split_ratio),
                Constraint::Percentage(100 - state.split_ratio),
            ])
            .split(chunks[1]);

        render_list(frame, panes[0], state);
        render_preview(frame, panes[1], state);
    } else {
        render_list(frame, chunks[1], state);
    }

    if let Some(ref error) = state.status.error {
        error_bar(frame, chunks[2], error);
    } else {
        help_bar(
            frame,
            chunks[2],
            &[
                ("j/k", "move"),
                ("Enter", "open"),
                ("c", "compose"),
                ("d", "delete"),
                ("u", "unread"),
                ("R", "refresh"),
                ("q", "quit"),
            ],
        );
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.emails.is_empty() {
        let hint = if state.status.loading {
            "Loading inbox..."
        } else {
            "Inbox is empty"
        };
        let paragraph = Paragraph::new(hint).style(Theme::text_muted());
        frame.render_widget(paragraph, inner);
        return;
    }

    let height = inner.height as usize;
    // Keep the cursor row visible
    let scroll_offset = if state.cursor >= height {
        state.cursor + 1 - height
    } else {
        0
    };

    let date_width = 9;
    let sender_width = (inner.width as usize / 4).clamp(12, 30);
    let subject_width = (inner.width as usize)
        .saturating_sub(sender_width + date_width + 5)
        .max(8);

    let lines: Vec<Line> = state
        .emails
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(height)
        .map(|(i, email)| {
            let marker = if email.unread {
                Span::styled("● ", Theme::unread_marker())
            } else {
                Span::styled("  ", Theme::text_muted())
            };

            let text_style = if email.unread {
                Theme::text_unread()
            } else {
                Theme::text()
            };

            let mut spans = vec![
                marker,
                Span::styled(
                    format!(
                        "{:<width$} ",
                        truncate_string(&email.sender, sender_width),
                        width = sender_width
                    ),
                    text_style,
                ),
                Span::styled(
                    format!(
                        "{:<width$} ",
                        truncate_string(&email.subject, subject_width),
                        width = subject_width
                    ),
                    text_style,
                ),
                Span::styled(format_date(email.date), Theme::text_muted()),
            ];

            if i == state.cursor {
                for span in &mut spans {
                    span.style = span.style.patch(Theme::selection());
                }
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Preview pane for the selected mail. Renders a placeholder both when
/// nothing is selected and when the selection dangles (mail deleted).
fn render_preview(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(email) = state.selected_email() else {
        let paragraph = Paragraph::new("Nothing selected")
            .style(Theme::text_muted())
            .block(Block::default().padding(ratatui::widgets::Padding::new(1, 1, 1, 0)));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Headers
            Constraint::Min(0),    // Body
        ])
        .split(area);

    let headers = vec![
        Line::from(vec![
            Span::styled(" From:    ", Theme::label()),
            Span::styled(&email.sender, Theme::text()),
        ]),
        Line::from(vec![
            Span::styled(" Date:    ", Theme::label()),
            Span::styled(format_date(email.date), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled(" Subject: ", Theme::label()),
            Span::styled(&email.subject, Theme::text_unread()),
        ]),
    ];
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    frame.render_widget(Paragraph::new(headers).block(header_block), chunks[0]);

    let body = Paragraph::new(sanitize_text(&email.body))
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(ratatui::widgets::Padding::new(1, 1, 0, 0)));
    frame.render_widget(body, chunks[1]);
}
