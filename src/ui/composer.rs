use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::theme::Theme;
use super::widgets::{error_bar, help_bar};
use crate::api::types::Draft;
use crate::app::state::{AppState, ComposerField};

pub fn render_composer(frame: &mut Frame, state: &AppState, draft: &Draft, field: ComposerField) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(3), // To field
            Constraint::Length(3), // Subject field
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    super::status_bar::status_bar(frame, chunks[0], state);

    render_field(
        frame,
        chunks[1],
        "To",
        &draft.recipient,
        field == ComposerField::Recipient,
    );
    render_field(
        frame,
        chunks[2],
        "Subject",
        &draft.subject,
        field == ComposerField::Subject,
    );
    render_body(frame, chunks[3], &draft.body, field == ComposerField::Body);

    if let Some(ref error) = state.status.error {
        error_bar(frame, chunks[4], error);
    } else {
        help_bar(
            frame,
            chunks[4],
            &[
                ("Tab", "next field"),
                ("Ctrl+S", "send"),
                ("Esc", "discard"),
            ],
        );
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", label));

    let text = if focused {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    let paragraph = Paragraph::new(text).style(Theme::text()).block(block);
    frame.render_widget(paragraph, area);
}

fn render_body(frame: &mut Frame, area: Rect, value: &str, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Body ");

    let text = if focused {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    let paragraph = Paragraph::new(text)
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
