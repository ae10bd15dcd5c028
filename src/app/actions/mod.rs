//! Action handlers for user input
//!
//! This module is split into focused submodules:
//! - `navigation`: Movement and scrolling
//! - `mailbox`: Mail operations (open, delete, read-state)
//! - `compose`: Mail composition and sending

mod compose;
mod mailbox;
mod navigation;

use anyhow::Result;

use crate::input::Action;

use super::App;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Navigation
            Action::Up => self.move_up(),
            Action::Down => self.move_down(),
            Action::Top => self.move_to_top(),
            Action::Bottom => self.move_to_bottom(),
            Action::PageUp => self.move_page(-(crate::constants::PAGE_JUMP as i32)),
            Action::PageDown => self.move_page(crate::constants::PAGE_JUMP as i32),

            // Mail actions
            Action::Open => self.open_selected().await,
            Action::Back => self.go_back(),
            Action::Quit => {} // Handled in event loop
            Action::Delete => self.delete_current().await,
            Action::ToggleUnread => self.toggle_unread().await,
            Action::Refresh => self.refresh().await,

            // Composer
            Action::Compose => self.start_compose(),
            Action::NextField => self.composer_next_field(),
            Action::PrevField => self.composer_prev_field(),
            Action::Send => self.send_draft().await,
            Action::Cancel => self.cancel_compose(),
        }
        Ok(())
    }

    pub(crate) fn handle_char(&mut self, c: char) {
        self.composer_char(c);
    }

    pub(crate) fn handle_backspace(&mut self) {
        self.composer_backspace();
    }
}
