//! REST backend access: wire model, HTTP client, and the polling actor

mod actor;
mod client;
pub mod types;

pub use actor::{ApiCommand, ApiEvent, ApiHandle, spawn_api_actor};
pub use client::{ApiError, MailClient};
