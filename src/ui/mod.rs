mod composer;
mod inbox;
mod reader;
mod status_bar;
pub mod theme;
mod widgets;

use ratatui::Frame;

use crate::app::state::{AppState, View};

pub fn render(frame: &mut Frame, state: &AppState) {
    match &state.view {
        View::Inbox => inbox::render_inbox(frame, state),
        View::Reader => reader::render_reader(frame, state),
        View::Composer { draft, field } => composer::render_composer(frame, state, draft, *field),
    }
}
