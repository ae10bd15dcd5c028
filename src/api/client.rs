//! HTTP client for the webmail REST backend

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Draft, Email, EmailId};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
    #[error("server rejected {action}")]
    Rejected { action: &'static str },
}

/// Client for the backend's JSON mail collection
#[derive(Clone)]
pub struct MailClient {
    client: Client,
    base_url: String,
    sender: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    sender: &'a str,
    recipient: &'a str,
    subject: &'a str,
    body: &'a str,
}

#[derive(Serialize)]
struct UnreadRequest {
    unread: bool,
}

/// Mutation responses carry only a success flag
#[derive(Deserialize)]
struct Ack {
    success: bool,
}

impl MailClient {
    /// Create a new client. `base_url` must not end with a slash;
    /// `sender` is placed in the sender field of outgoing mail.
    pub fn new(base_url: String, sender: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            sender,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full mail collection
    pub async fn fetch_inbox(&self) -> Result<Vec<Email>, ApiError> {
        let response = self.client.get(self.url("/emails")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json().await?)
    }

    /// Submit a new mail
    pub async fn send(&self, draft: &Draft) -> Result<(), ApiError> {
        let request = SendRequest {
            sender: &self.sender,
            recipient: &draft.recipient,
            subject: &draft.subject,
            body: &draft.body,
        };

        let response = self
            .client
            .post(self.url("/emails"))
            .json(&request)
            .send()
            .await?;

        Self::check_ack(response, "send").await
    }

    /// Update the unread flag of a single mail
    pub async fn set_unread(&self, id: EmailId, unread: bool) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/emails/{}", id)))
            .json(&UnreadRequest { unread })
            .send()
            .await?;

        Self::check_ack(response, "update").await
    }

    /// Delete a mail by id
    pub async fn delete(&self, id: EmailId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/emails/{}", id)))
            .send()
            .await?;

        Self::check_ack(response, "delete").await
    }

    async fn check_ack(response: reqwest::Response, action: &'static str) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let ack: Ack = response.json().await?;
        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Rejected { action })
        }
    }
}
