//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.

use crate::api::types::{Draft, Email, EmailId};
use crate::constants::ERROR_TTL_SECS;

#[derive(Debug, Clone, Default)]
pub enum View {
    #[default]
    Inbox,
    Reader,
    Composer {
        draft: Draft,
        field: ComposerField,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComposerField {
    #[default]
    Recipient,
    Subject,
    Body,
}

impl ComposerField {
    pub fn next(self) -> Self {
        match self {
            Self::Recipient => Self::Subject,
            Self::Subject => Self::Body,
            Self::Body => Self::Recipient,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Recipient => Self::Body,
            Self::Subject => Self::Recipient,
            Self::Body => Self::Subject,
        }
    }
}

/// Loading, error, and status message state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub loading: bool,
    pub error: Option<String>,
    pub error_time: Option<std::time::Instant>,
    pub message: String,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(std::time::Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
    }

    /// Clear error if TTL expired. Returns true if an error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

/// Connection status as observed through polling
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    pub connected: bool,
    /// Unix timestamp of the last successful poll
    pub last_poll: Option<i64>,
    pub account_name: String,
}

impl ConnectionState {
    /// Returns display account name, defaulting to "Not connected" if empty
    pub fn display_account(&self) -> &str {
        if self.account_name.is_empty() {
            "Not connected"
        } else {
            &self.account_name
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,
    /// Full mail collection, replaced wholesale on content-differing polls
    pub emails: Vec<Email>,
    /// Id of the mail open for detail viewing, if any. A lookup key,
    /// not an index: the referenced mail may disappear under it.
    pub selection: Option<EmailId>,
    /// List cursor position (row highlight), independent of selection
    pub cursor: usize,
    pub reader_scroll: usize,

    // Status state (loading, error, status message)
    pub status: StatusState,

    // Connection status
    pub connection: ConnectionState,

    // UI settings
    pub split_ratio: u16,
}

impl AppState {
    /// The mail currently open for detail viewing. Linear lookup each
    /// render; returns None both when nothing is selected and when the
    /// selected mail no longer exists.
    pub fn selected_email(&self) -> Option<&Email> {
        let id = self.selection?;
        self.emails.iter().find(|e| e.id == id)
    }

    /// The mail under the list cursor
    pub fn email_at_cursor(&self) -> Option<&Email> {
        self.emails.get(self.cursor)
    }

    pub fn unread_count(&self) -> usize {
        self.emails.iter().filter(|e| e.unread).count()
    }

    /// Replace the collection with a poll snapshot, unless it is equal
    /// to current state. Returns whether state was replaced.
    pub fn apply_snapshot(&mut self, emails: Vec<Email>) -> bool {
        if self.emails == emails {
            return false;
        }
        self.emails = emails;
        self.clamp_cursor();
        true
    }

    /// Prepend the provisional copy of a confirmed send
    pub fn apply_sent(&mut self, email: Email) {
        self.emails.insert(0, email);
        // Keep the cursor on the row it was pointing at
        if !self.emails.is_empty() && self.cursor + 1 < self.emails.len() {
            self.cursor += 1;
        }
    }

    /// Remove a confirmed deletion, clearing the selection if it
    /// referenced the deleted mail
    pub fn apply_deleted(&mut self, id: EmailId) {
        self.emails.retain(|e| e.id != id);
        if self.selection == Some(id) {
            self.selection = None;
        }
        self.clamp_cursor();
    }

    /// Apply a confirmed unread-flag change. Returns whether a mail
    /// was updated.
    pub fn apply_unread(&mut self, id: EmailId, unread: bool) -> bool {
        if let Some(email) = self.emails.iter_mut().find(|e| e.id == id) {
            email.unread = unread;
            true
        } else {
            false
        }
    }

    /// Set the selection. Returns whether the selected id changed,
    /// which is what gates the mark-as-read request.
    pub fn select(&mut self, id: EmailId) -> bool {
        if self.selection == Some(id) {
            return false;
        }
        self.selection = Some(id);
        true
    }

    /// Move cursor down one row
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.emails.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor up one row
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.emails.len().saturating_sub(1);
    }

    /// Move cursor by delta (bounded)
    pub fn move_page(&mut self, delta: i32) {
        let max = self.emails.len().saturating_sub(1) as i32;
        self.cursor = (self.cursor as i32 + delta).clamp(0, max.max(0)) as usize;
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.emails.len() {
            self.cursor = self.emails.len().saturating_sub(1);
        }
    }

    /// Get maximum reader scroll value based on current content
    pub fn max_reader_scroll(&self) -> usize {
        if let Some(email) = self.selected_email() {
            email.body.lines().count().saturating_sub(1)
        } else {
            0
        }
    }

    /// Scroll reader down by one line (bounded)
    pub fn scroll_reader_down(&mut self) {
        if self.reader_scroll < self.max_reader_scroll() {
            self.reader_scroll += 1;
        }
    }

    /// Scroll reader up by one line
    pub fn scroll_reader_up(&mut self) {
        self.reader_scroll = self.reader_scroll.saturating_sub(1);
    }

    /// Reset reader scroll when changing mails
    pub fn reset_reader_scroll(&mut self) {
        self.reader_scroll = 0;
    }

    // Delegate methods to StatusState
    pub fn set_error(&mut self, error: impl ToString) {
        self.status.set_error(error);
    }

    pub fn clear_error_if_expired(&mut self) -> bool {
        self.status.clear_error_if_expired()
    }

    pub fn set_status(&mut self, msg: impl ToString) {
        self.status.set_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Draft;

    fn email(id: EmailId, unread: bool) -> Email {
        Email {
            id,
            sender: format!("sender{}@example.com", id),
            recipient: "me@example.com".to_string(),
            subject: format!("Subject {}", id),
            body: "body".to_string(),
            date: 1_700_000_000 + id,
            unread,
        }
    }

    fn state_with(emails: Vec<Email>) -> AppState {
        AppState {
            emails,
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_snapshot_is_not_applied() {
        let mut state = state_with(vec![email(2, true), email(1, false)]);
        let snapshot = state.emails.clone();

        assert!(!state.apply_snapshot(snapshot));
        assert_eq!(state.emails.len(), 2);
    }

    #[test]
    fn test_differing_snapshot_replaces_state() {
        let mut state = state_with(vec![email(1, true)]);

        assert!(state.apply_snapshot(vec![email(2, true), email(1, false)]));
        assert_eq!(state.emails.len(), 2);
        assert_eq!(state.emails[0].id, 2);
    }

    #[test]
    fn test_snapshot_shrink_clamps_cursor() {
        let mut state = state_with(vec![email(3, false), email(2, false), email(1, false)]);
        state.cursor = 2;

        state.apply_snapshot(vec![email(3, false)]);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_confirmed_send_prepends_provisional() {
        let mut state = state_with(vec![email(2, false), email(1, false)]);
        let draft = Draft {
            recipient: "bob@example.com".to_string(),
            subject: "Hi".to_string(),
            body: "hello".to_string(),
        };

        state.apply_sent(Email::provisional("me@example.com", &draft, 1_700_000_999_000));

        assert_eq!(state.emails.len(), 3);
        assert_eq!(state.emails[0].recipient, "bob@example.com");
        assert!(state.emails[0].unread);
    }

    #[test]
    fn test_deleting_selected_mail_clears_selection() {
        let mut state = state_with(vec![email(2, false), email(1, false)]);
        state.select(2);

        state.apply_deleted(2);

        assert_eq!(state.selection, None);
        assert_eq!(state.emails.len(), 1);
    }

    #[test]
    fn test_deleting_other_mail_keeps_selection() {
        let mut state = state_with(vec![email(2, false), email(1, false)]);
        state.select(2);

        state.apply_deleted(1);

        assert_eq!(state.selection, Some(2));
    }

    #[test]
    fn test_dangling_selection_yields_no_detail() {
        let mut state = state_with(vec![email(1, false)]);
        state.selection = Some(42);

        assert!(state.selected_email().is_none());
    }

    #[test]
    fn test_select_reports_change_only_once() {
        let mut state = state_with(vec![email(1, true)]);

        assert!(state.select(1));
        assert!(!state.select(1));
    }

    #[test]
    fn test_apply_unread_flips_flag() {
        let mut state = state_with(vec![email(1, true)]);

        assert!(state.apply_unread(1, false));
        assert!(!state.emails[0].unread);
        assert_eq!(state.unread_count(), 0);

        // Mail gone in the meantime: nothing to update
        assert!(!state.apply_unread(42, false));
    }
}
