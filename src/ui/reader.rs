use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::theme::Theme;
use super::widgets::{error_bar, format_date, help_bar, sanitize_text};
use crate::api::types::Email;
use crate::app::state::AppState;

pub fn render_reader(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(5), // Headers
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    super::status_bar::status_bar(frame, chunks[0], state);

    // Linear lookup every render: covers the mail disappearing out
    // from under the selection between polls
    if let Some(email) = state.selected_email() {
        render_headers(frame, chunks[1], email);
        render_body(frame, chunks[2], state, email);
    } else {
        let paragraph = Paragraph::new("This message is no longer available")
            .style(Theme::text_muted());
        frame.render_widget(paragraph, chunks[1]);
    }

    if let Some(ref error) = state.status.error {
        error_bar(frame, chunks[3], error);
    } else {
        help_bar(
            frame,
            chunks[3],
            &[
                ("j/k", "scroll"),
                ("d", "delete"),
                ("u", "unread"),
                ("Esc", "back"),
            ],
        );
    }
}

fn render_headers(frame: &mut Frame, area: Rect, email: &Email) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_style = Theme::label();
    let value_style = Theme::text();

    let lines = vec![
        Line::from(vec![
            Span::styled("From:    ", label_style),
            Span::styled(&email.sender, value_style),
        ]),
        Line::from(vec![
            Span::styled("To:      ", label_style),
            Span::styled(&email.recipient, value_style),
        ]),
        Line::from(vec![
            Span::styled("Date:    ", label_style),
            Span::styled(format_date(email.date), value_style),
        ]),
        Line::from(vec![
            Span::styled("Subject: ", label_style),
            Span::styled(&email.subject, Theme::text_unread()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, email: &Email) {
    let paragraph = Paragraph::new(sanitize_text(&email.body))
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .scroll((state.reader_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
