use serde::{Deserialize, Serialize};

/// Identifier of a mail record. Server-assigned for authoritative
/// records, derived from the wall clock for provisional ones.
pub type EmailId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: EmailId,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// Creation time as unix seconds
    pub date: i64,
    pub unread: bool,
}

impl Email {
    /// Synthesize the local stand-in for a just-sent draft.
    ///
    /// The id is taken from the supplied millisecond clock value, which
    /// keeps it unique among local inserts and out of the way of small
    /// server-assigned ids. The server's authoritative copy arrives with
    /// a later poll and replaces the whole collection by content
    /// comparison.
    pub fn provisional(sender: &str, draft: &Draft, now_ms: i64) -> Self {
        Self {
            id: now_ms,
            sender: sender.to_string(),
            recipient: draft.recipient.clone(),
            subject: draft.subject.clone(),
            body: draft.body.clone(),
            date: now_ms / 1000,
            unread: true,
        }
    }

}

/// An outgoing mail under composition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft is sendable once it has a recipient
    pub fn is_sendable(&self) -> bool {
        !self.recipient.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provisional_fields() {
        let draft = Draft {
            recipient: "bob@example.com".to_string(),
            subject: "Hello".to_string(),
            body: "First line\nSecond line".to_string(),
        };

        let email = Email::provisional("alice@example.com", &draft, 1_700_000_000_123);
        assert_eq!(email.id, 1_700_000_000_123);
        assert_eq!(email.date, 1_700_000_000);
        assert_eq!(email.sender, "alice@example.com");
        assert_eq!(email.recipient, "bob@example.com");
        assert!(email.unread);
        assert_eq!(email.body, "First line\nSecond line");
    }

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"[
            {"id": 2, "sender": "a@x.com", "recipient": "b@x.com",
             "subject": "Re: hi", "body": "yes", "date": 1700000100, "unread": false},
            {"id": 1, "sender": "b@x.com", "recipient": "a@x.com",
             "subject": "hi", "body": "hello", "date": 1700000000, "unread": true}
        ]"#;

        let emails: Vec<Email> = serde_json::from_str(json).unwrap();
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].id, 2);
        assert!(!emails[0].unread);
        assert!(emails[1].unread);
    }

    #[test]
    fn test_draft_sendable() {
        let mut draft = Draft::new();
        assert!(!draft.is_sendable());
        draft.recipient = "  ".to_string();
        assert!(!draft.is_sendable());
        draft.recipient = "bob@example.com".to_string();
        assert!(draft.is_sendable());
    }
}
