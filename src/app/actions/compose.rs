//! Mail composition and sending

use crate::api::ApiCommand;
use crate::api::types::Draft;
use crate::app::state::{ComposerField, View};

use super::super::App;

impl App {
    pub(super) fn start_compose(&mut self) {
        if matches!(self.state.view, View::Composer { .. }) {
            return;
        }
        self.state.view = View::Composer {
            draft: Draft::new(),
            field: ComposerField::default(),
        };
    }

    pub(super) fn cancel_compose(&mut self) {
        if matches!(self.state.view, View::Composer { .. }) {
            self.state.view = View::Inbox;
        }
    }

    pub(super) fn composer_next_field(&mut self) {
        if let View::Composer { field, .. } = &mut self.state.view {
            *field = field.next();
        }
    }

    pub(super) fn composer_prev_field(&mut self) {
        if let View::Composer { field, .. } = &mut self.state.view {
            *field = field.prev();
        }
    }

    pub(super) fn composer_char(&mut self, c: char) {
        if let View::Composer { draft, field } = &mut self.state.view {
            match field {
                ComposerField::Recipient if c != '\n' => draft.recipient.push(c),
                ComposerField::Subject if c != '\n' => draft.subject.push(c),
                ComposerField::Body => draft.body.push(c),
                // Enter moves on from the single-line fields
                _ => *field = field.next(),
            }
        }
    }

    pub(super) fn composer_backspace(&mut self) {
        if let View::Composer { draft, field } = &mut self.state.view {
            match field {
                ComposerField::Recipient => draft.recipient.pop(),
                ComposerField::Subject => draft.subject.pop(),
                ComposerField::Body => draft.body.pop(),
            };
        }
    }

    /// Submit the draft. The provisional copy is prepended once the
    /// server confirms, via the Sent event.
    pub(super) async fn send_draft(&mut self) {
        let View::Composer { draft, .. } = &self.state.view else {
            return;
        };

        if !draft.is_sendable() {
            self.state.set_error("Recipient is required");
            return;
        }

        let draft = draft.clone();
        self.state.view = View::Inbox;
        self.state.set_status(format!("Sending to {}...", draft.recipient));
        self.api.cmd_tx.send(ApiCommand::Send(draft)).await.ok();
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use crate::api::{ApiCommand, ApiEvent, ApiHandle};
    use crate::app::App;
    use crate::app::state::{ComposerField, View};
    use crate::config::{AccountConfig, Config, ServerConfig, UiConfig};
    use crate::input::Action;

    fn test_app() -> (App, mpsc::Receiver<ApiCommand>, mpsc::Sender<ApiEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(16);
        let config = Config {
            account: AccountConfig {
                address: "me@example.com".to_string(),
                display_name: None,
            },
            server: ServerConfig {
                url: "http://localhost:8080".to_string(),
                poll_interval_ms: 2000,
            },
            ui: UiConfig::default(),
        };
        let app = App::new(config, ApiHandle::from_channels(cmd_tx, event_rx));
        (app, cmd_rx, event_tx)
    }

    fn type_into(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_char(c);
        }
    }

    #[tokio::test]
    async fn test_confirmed_send_prepends_provisional_copy() {
        let (mut app, mut cmd_rx, event_tx) = test_app();

        app.handle_action(Action::Compose).await.unwrap();
        type_into(&mut app, "bob@example.com");
        app.handle_action(Action::NextField).await.unwrap();
        type_into(&mut app, "Hello");
        app.handle_action(Action::NextField).await.unwrap();
        type_into(&mut app, "hi there");
        app.handle_action(Action::Send).await.unwrap();

        let ApiCommand::Send(draft) = cmd_rx.try_recv().unwrap() else {
            panic!("expected a send command");
        };
        assert_eq!(draft.recipient, "bob@example.com");
        assert_eq!(draft.subject, "Hello");
        assert_eq!(draft.body, "hi there");
        assert!(matches!(app.state.view, View::Inbox));

        // Nothing prepended until the server confirms
        assert!(app.state.emails.is_empty());

        event_tx.send(ApiEvent::Sent { draft }).await.unwrap();
        assert!(app.process_api_events());
        assert_eq!(app.state.emails.len(), 1);
        assert_eq!(app.state.emails[0].sender, "me@example.com");
        assert!(app.state.emails[0].unread);
    }

    #[tokio::test]
    async fn test_send_without_recipient_is_refused() {
        let (mut app, mut cmd_rx, _event_tx) = test_app();

        app.handle_action(Action::Compose).await.unwrap();
        app.handle_action(Action::Send).await.unwrap();

        assert!(cmd_rx.try_recv().is_err());
        assert!(app.state.status.error.is_some());
        assert!(matches!(app.state.view, View::Composer { .. }));
    }

    #[tokio::test]
    async fn test_enter_advances_single_line_fields() {
        let (mut app, _cmd_rx, _event_tx) = test_app();

        app.handle_action(Action::Compose).await.unwrap();
        type_into(&mut app, "bob@example.com\n");

        let View::Composer { field, draft } = &app.state.view else {
            panic!("expected composer view");
        };
        assert_eq!(*field, ComposerField::Subject);
        assert_eq!(draft.recipient, "bob@example.com");
    }
}
