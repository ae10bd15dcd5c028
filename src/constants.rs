//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Default interval between inbox polls in milliseconds.
/// Overridable via `[server] poll_interval_ms` in the config file.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Timeout for crossterm input polling in milliseconds.
/// Bounds how long the event loop blocks between actor-event drains.
pub const INPUT_POLL_MS: u64 = 150;

/// Error message display duration in seconds before auto-dismiss.
pub const ERROR_TTL_SECS: u64 = 5;

/// Number of rows a PageUp/PageDown jump moves the cursor.
pub const PAGE_JUMP: usize = 10;

// === UI Constants ===

/// Minimum terminal width to show split view (list + preview).
/// Below this width, only the email list is shown.
pub const MIN_SPLIT_VIEW_WIDTH: u16 = 80;

/// Minimum split ratio percentage for the inbox split view.
pub const SPLIT_RATIO_MIN: u16 = 30;

/// Maximum split ratio percentage for the inbox split view.
pub const SPLIT_RATIO_MAX: u16 = 70;
