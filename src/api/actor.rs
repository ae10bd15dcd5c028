//! Background actor owning the poll timer and all backend requests.
//!
//! The UI task never performs HTTP itself: it sends `ApiCommand`s and
//! drains `ApiEvent`s. Each mutation command produces an explicit
//! success or failure event, so local state is only touched once the
//! server has confirmed the request.

use tokio::sync::mpsc;
use tokio::time::{Duration, MissedTickBehavior};

use super::client::MailClient;
use super::types::{Draft, Email, EmailId};

/// Commands that can be sent to the API actor
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// Poll the inbox now, outside the regular schedule
    Refresh,
    /// Submit a draft
    Send(Draft),
    /// Delete a mail by id
    Delete(EmailId),
    /// Update the unread flag of a mail
    SetUnread { id: EmailId, unread: bool },
    /// Stop the actor and cancel the poll timer
    Shutdown,
}

/// Events emitted by the API actor
#[derive(Debug, Clone)]
pub enum ApiEvent {
    /// Result of a poll: the full collection as the server sees it
    Snapshot(Vec<Email>),
    /// The server accepted a draft
    Sent { draft: Draft },
    /// The server deleted a mail
    Deleted { id: EmailId },
    /// The server updated an unread flag
    UnreadSet { id: EmailId, unread: bool },
    /// A mutation was refused or failed in transit; state is untouched
    MutationFailed { action: &'static str, error: String },
    /// A poll failed; the next tick retries
    PollFailed(String),
}

/// Handle for communicating with the API actor
pub struct ApiHandle {
    pub cmd_tx: mpsc::Sender<ApiCommand>,
    pub event_rx: mpsc::Receiver<ApiEvent>,
}

impl ApiHandle {
    /// Build a handle from raw channel ends, so tests can observe
    /// commands without a running actor
    #[cfg(test)]
    pub fn from_channels(
        cmd_tx: mpsc::Sender<ApiCommand>,
        event_rx: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        Self { cmd_tx, event_rx }
    }

    /// Request shutdown of the actor. This cancels the poll timer;
    /// it must be called before the application exits.
    pub async fn shutdown(&self) {
        self.cmd_tx.send(ApiCommand::Shutdown).await.ok();
    }
}

/// Spawn the API actor task
pub fn spawn_api_actor(client: MailClient, poll_interval: Duration) -> ApiHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (event_tx, event_rx) = mpsc::channel(32);

    tokio::spawn(api_actor_loop(client, poll_interval, cmd_rx, event_tx));

    ApiHandle { cmd_tx, event_rx }
}

async fn api_actor_loop(
    client: MailClient,
    poll_interval: Duration,
    mut cmd_rx: mpsc::Receiver<ApiCommand>,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    // The first tick fires immediately, so the inbox is fetched right
    // at startup. Delayed ticks are not bursted afterwards.
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !poll_inbox(&client, &event_tx).await {
                    break;
                }
            }

            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else {
                    tracing::debug!("API actor: command sender dropped");
                    break;
                };
                if !handle_command(&client, &event_tx, cmd).await {
                    break;
                }
            }
        }
    }

    tracing::debug!("API actor stopped, poll timer cancelled");
}

/// Execute one command. Returns false when the actor should stop.
async fn handle_command(
    client: &MailClient,
    event_tx: &mpsc::Sender<ApiEvent>,
    cmd: ApiCommand,
) -> bool {
    match cmd {
        ApiCommand::Refresh => poll_inbox(client, event_tx).await,

        ApiCommand::Send(draft) => {
            let event = match client.send(&draft).await {
                Ok(()) => ApiEvent::Sent { draft },
                Err(e) => ApiEvent::MutationFailed {
                    action: "send",
                    error: e.to_string(),
                },
            };
            send_event(event_tx, event).await
        }

        ApiCommand::Delete(id) => {
            let event = match client.delete(id).await {
                Ok(()) => ApiEvent::Deleted { id },
                Err(e) => ApiEvent::MutationFailed {
                    action: "delete",
                    error: e.to_string(),
                },
            };
            send_event(event_tx, event).await
        }

        ApiCommand::SetUnread { id, unread } => {
            let event = match client.set_unread(id, unread).await {
                Ok(()) => ApiEvent::UnreadSet { id, unread },
                Err(e) => ApiEvent::MutationFailed {
                    action: "update",
                    error: e.to_string(),
                },
            };
            send_event(event_tx, event).await
        }

        ApiCommand::Shutdown => false,
    }
}

/// Fetch the inbox and emit the snapshot. Poll failures are reported
/// and swallowed; recovery is the next tick. Returns false when the
/// event receiver is gone.
async fn poll_inbox(client: &MailClient, event_tx: &mpsc::Sender<ApiEvent>) -> bool {
    let event = match client.fetch_inbox().await {
        Ok(emails) => ApiEvent::Snapshot(emails),
        Err(e) => {
            tracing::warn!("Inbox poll failed: {}", e);
            ApiEvent::PollFailed(e.to_string())
        }
    };
    send_event(event_tx, event).await
}

async fn send_event(event_tx: &mpsc::Sender<ApiEvent>, event: ApiEvent) -> bool {
    if event_tx.send(event).await.is_err() {
        tracing::warn!("API actor: event receiver dropped");
        false
    } else {
        true
    }
}
