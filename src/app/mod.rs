//! Application core - manages state, the API actor handle, and coordination

mod actions;
mod event_loop;
pub mod state;

use anyhow::Result;

use crate::api::ApiHandle;
use crate::config::Config;
use crate::constants::{SPLIT_RATIO_MAX, SPLIT_RATIO_MIN};
use crate::input::KeyBindings;
use state::{AppState, ConnectionState, StatusState};

pub struct App {
    pub(crate) config: Config,
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    /// Channel pair to the API actor (polling + mutations)
    pub(crate) api: ApiHandle,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: Config, api: ApiHandle) -> Self {
        let bindings = KeyBindings::new(&config.ui.keybinding_mode);

        let state = AppState {
            status: StatusState {
                loading: true, // First poll is in flight
                ..Default::default()
            },
            split_ratio: config.ui.split_ratio.clamp(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX),
            connection: ConnectionState {
                account_name: config.account.display_name_or_address().to_string(),
                connected: false, // Set true on the first snapshot
                ..Default::default()
            },
            ..Default::default()
        };

        Self {
            config,
            state,
            bindings,
            api,
            dirty: true, // Start dirty for initial render
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();

        self.state.set_status("Connecting...");

        let result = self.event_loop(&mut terminal).await;

        ratatui::restore();

        // Stop the actor so the poll timer does not outlive the UI
        self.api.shutdown().await;

        result
    }
}
