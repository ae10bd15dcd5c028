//! Top status bar shared by all views

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::Theme;
use crate::app::state::AppState;

pub fn status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let indicator = if state.connection.connected {
        Span::styled(" ● ", Theme::status_connected())
    } else {
        Span::styled(" ○ ", Theme::status_disconnected())
    };
    spans.push(indicator);

    spans.push(Span::styled(
        state.connection.display_account().to_string(),
        Theme::text(),
    ));

    spans.push(Span::styled(
        format!("  {} unread / {} total", state.unread_count(), state.emails.len()),
        Theme::text_muted(),
    ));

    if state.status.loading {
        spans.push(Span::styled("  syncing...", Theme::text_muted()));
    } else if let Some(last_poll) = state.connection.last_poll {
        let ago = (chrono::Utc::now().timestamp() - last_poll).max(0);
        spans.push(Span::styled(
            format!("  synced {}s ago", ago),
            Theme::text_muted(),
        ));
    }

    if !state.status.message.is_empty() {
        spans.push(Span::styled(
            format!("  │ {}", state.status.message),
            Theme::text(),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}
