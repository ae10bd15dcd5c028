//! Main event loop and API event processing

use anyhow::Result;
use crossterm::event;
use ratatui::DefaultTerminal;
use std::time::Duration;

use crate::api::ApiEvent;
use crate::constants::INPUT_POLL_MS;
use crate::input::{InputResult, handle_input};

use super::App;
use super::state::View;

impl App {
    pub(crate) async fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            // Process API events FIRST (non-blocking) - prioritize freshness
            if self.process_api_events() {
                self.dirty = true;
            }

            // Clear expired errors
            if self.state.clear_error_if_expired() {
                self.dirty = true;
            }

            // Render only when dirty
            if self.dirty {
                terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
                self.dirty = false;
            }

            // Handle input with a short timeout so actor events keep draining
            if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => {
                        self.handle_action(action).await?;
                    }
                    InputResult::Char(c) => {
                        self.handle_char(c);
                    }
                    InputResult::Backspace => {
                        self.handle_backspace();
                    }
                    InputResult::Continue => {}
                }
            }
        }

        Ok(())
    }

    /// Drain events from the API actor. Returns true if state changed
    /// in a way that needs a re-render.
    pub(crate) fn process_api_events(&mut self) -> bool {
        let mut changed = false;

        while let Ok(event) = self.api.event_rx.try_recv() {
            match event {
                ApiEvent::Snapshot(emails) => {
                    self.state.connection.last_poll = Some(chrono::Utc::now().timestamp());
                    if !self.state.connection.connected || self.state.status.loading {
                        self.state.connection.connected = true;
                        self.state.status.loading = false;
                        changed = true;
                    }
                    // Replaced only when the payload differs from current
                    // state, so identical polls do not cause re-renders
                    if self.state.apply_snapshot(emails) {
                        changed = true;
                    }
                }

                ApiEvent::Sent { draft } => {
                    let email = crate::api::types::Email::provisional(
                        &self.config.account.address,
                        &draft,
                        chrono::Utc::now().timestamp_millis(),
                    );
                    self.state.apply_sent(email);
                    self.state.set_status(format!("Sent to {}", draft.recipient));
                    changed = true;
                }

                ApiEvent::Deleted { id } => {
                    self.state.apply_deleted(id);
                    // Nothing left to read: drop back to the list
                    if matches!(self.state.view, View::Reader)
                        && self.state.selected_email().is_none()
                    {
                        self.state.view = View::Inbox;
                    }
                    self.state.set_status("Deleted");
                    changed = true;
                }

                ApiEvent::UnreadSet { id, unread } => {
                    if self.state.apply_unread(id, unread) {
                        changed = true;
                    }
                }

                ApiEvent::MutationFailed { action, error } => {
                    tracing::error!("Mutation '{}' failed: {}", action, error);
                    self.state.set_error(format!("{} failed: {}", action, error));
                    changed = true;
                }

                ApiEvent::PollFailed(error) => {
                    tracing::warn!("Poll failed: {}", error);
                    if self.state.connection.connected || self.state.status.loading {
                        self.state.connection.connected = false;
                        self.state.status.loading = false;
                        changed = true;
                    }
                }
            }
        }

        changed
    }
}
