//! Mail actions (open, delete, read-state, refresh)

use crate::api::ApiCommand;
use crate::app::state::View;

use super::super::App;

impl App {
    /// Open the mail under the cursor in the reader. Selecting a mail
    /// whose id differs from the previous selection issues exactly one
    /// mark-as-read request; the flag flips locally once the server
    /// confirms.
    pub(super) async fn open_selected(&mut self) {
        let Some(email) = self.state.email_at_cursor().cloned() else {
            return;
        };

        let selection_changed = self.state.select(email.id);
        self.state.view = View::Reader;
        self.state.reset_reader_scroll();

        if selection_changed {
            self.api
                .cmd_tx
                .send(ApiCommand::SetUnread {
                    id: email.id,
                    unread: false,
                })
                .await
                .ok();
        }
    }

    pub(super) fn go_back(&mut self) {
        match self.state.view {
            View::Inbox => {}
            View::Reader => {
                self.state.view = View::Inbox;
            }
            // Esc in composer routes through cancel_compose
            View::Composer { .. } => {
                self.state.view = View::Inbox;
            }
        }
    }

    /// Delete the mail under the cursor (inbox) or the open mail
    /// (reader). Removal from local state happens when the server
    /// confirms, via the Deleted event.
    pub(super) async fn delete_current(&mut self) {
        let id = match self.state.view {
            View::Inbox => self.state.email_at_cursor().map(|e| e.id),
            View::Reader => self.state.selection,
            View::Composer { .. } => None,
        };

        if let Some(id) = id {
            self.state.set_status("Deleting...");
            self.api.cmd_tx.send(ApiCommand::Delete(id)).await.ok();
        }
    }

    /// Flip the unread flag of the mail under the cursor (inbox) or
    /// the open mail (reader)
    pub(super) async fn toggle_unread(&mut self) {
        let target = match self.state.view {
            View::Inbox => self.state.email_at_cursor(),
            View::Reader => self.state.selected_email(),
            View::Composer { .. } => None,
        };

        if let Some(email) = target {
            self.api
                .cmd_tx
                .send(ApiCommand::SetUnread {
                    id: email.id,
                    unread: !email.unread,
                })
                .await
                .ok();
        }
    }

    /// Poll the inbox now, outside the regular schedule
    pub(super) async fn refresh(&mut self) {
        self.state.status.loading = true;
        self.state.set_status("Refreshing...");
        self.api.cmd_tx.send(ApiCommand::Refresh).await.ok();
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use crate::api::types::Email;
    use crate::api::{ApiCommand, ApiEvent, ApiHandle};
    use crate::app::App;
    use crate::config::{AccountConfig, Config, ServerConfig, UiConfig};
    use crate::input::Action;

    fn test_config() -> Config {
        Config {
            account: AccountConfig {
                address: "me@example.com".to_string(),
                display_name: None,
            },
            server: ServerConfig {
                url: "http://localhost:8080".to_string(),
                poll_interval_ms: 2000,
            },
            ui: UiConfig::default(),
        }
    }

    /// App wired to raw channels instead of a running actor, so tests
    /// can observe outgoing commands and inject events.
    fn test_app() -> (
        App,
        mpsc::Receiver<ApiCommand>,
        mpsc::Sender<ApiEvent>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(16);
        let app = App::new(test_config(), ApiHandle::from_channels(cmd_tx, event_rx));
        (app, cmd_rx, event_tx)
    }

    fn email(id: i64, unread: bool) -> Email {
        Email {
            id,
            sender: "other@example.com".to_string(),
            recipient: "me@example.com".to_string(),
            subject: "Subject".to_string(),
            body: "body".to_string(),
            date: 1_700_000_000,
            unread,
        }
    }

    #[tokio::test]
    async fn test_opening_unread_mail_issues_one_mark_read_request() {
        let (mut app, mut cmd_rx, _event_tx) = test_app();
        app.state.emails = vec![email(1, true)];

        app.handle_action(Action::Open).await.unwrap();
        // Re-opening the same mail must not issue another request
        app.handle_action(Action::Back).await.unwrap();
        app.handle_action(Action::Open).await.unwrap();

        assert_eq!(
            cmd_rx.try_recv().unwrap(),
            ApiCommand::SetUnread {
                id: 1,
                unread: false
            }
        );
        assert!(cmd_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_confirmed_mark_read_flips_local_flag() {
        let (mut app, mut cmd_rx, event_tx) = test_app();
        app.state.emails = vec![email(1, true)];

        app.handle_action(Action::Open).await.unwrap();
        let cmd = cmd_rx.try_recv().unwrap();
        assert_eq!(
            cmd,
            ApiCommand::SetUnread {
                id: 1,
                unread: false
            }
        );

        // Server confirms: the event handler applies the flag locally
        event_tx
            .send(ApiEvent::UnreadSet {
                id: 1,
                unread: false,
            })
            .await
            .unwrap();
        assert!(app.process_api_events());
        assert!(!app.state.emails[0].unread);
    }

    #[tokio::test]
    async fn test_delete_is_applied_on_confirmation_only() {
        let (mut app, mut cmd_rx, event_tx) = test_app();
        app.state.emails = vec![email(2, false), email(1, false)];
        app.state.select(2);

        app.handle_action(Action::Delete).await.unwrap();
        assert_eq!(cmd_rx.try_recv().unwrap(), ApiCommand::Delete(2));
        // Optimistic step waits for the success-flagged response
        assert_eq!(app.state.emails.len(), 2);

        event_tx.send(ApiEvent::Deleted { id: 2 }).await.unwrap();
        assert!(app.process_api_events());
        assert_eq!(app.state.emails.len(), 1);
        assert_eq!(app.state.selection, None);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_state_untouched() {
        let (mut app, _cmd_rx, event_tx) = test_app();
        app.state.emails = vec![email(1, true)];

        event_tx
            .send(ApiEvent::MutationFailed {
                action: "delete",
                error: "server rejected delete".to_string(),
            })
            .await
            .unwrap();

        assert!(app.process_api_events());
        assert_eq!(app.state.emails.len(), 1);
        assert!(app.state.status.error.is_some());
    }
}
