use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::DEFAULT_POLL_INTERVAL_MS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identity used as the sender of outgoing mail
    pub account: AccountConfig,
    /// Backend server connection settings
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Address placed in the `sender` field of outgoing mail
    pub address: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl AccountConfig {
    /// Get the display name or fall back to the address
    pub fn display_name_or_address(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.address)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the webmail backend, e.g. "http://localhost:8080"
    pub url: String,
    /// Interval between inbox polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl ServerConfig {
    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub keybinding_mode: KeybindingMode,
    #[serde(default)]
    pub theme: ThemeVariant,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Split pane ratio for inbox view (30-70, default 50 = equal split)
    #[serde(default = "default_split_ratio")]
    pub split_ratio: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeybindingMode {
    #[default]
    Vim,
    Arrows,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            keybinding_mode: KeybindingMode::default(),
            theme: ThemeVariant::default(),
            date_format: default_date_format(),
            split_ratio: default_split_ratio(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_date_format() -> String {
    "%b %d".to_string()
}

fn default_split_ratio() -> u16 {
    50
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pling");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at {}\n\
                 Please create a config file. Example:\n\n\
                 [account]\n\
                 address = \"you@example.com\"\n\n\
                 [server]\n\
                 url = \"http://localhost:8080\"\n\
                 poll_interval_ms = 2000\n\n\
                 [ui]\n\
                 keybinding_mode = \"vim\"",
                path.display()
            );
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path.parent().unwrap();

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [account]
            address = "test@example.com"
            display_name = "Test"

            [server]
            url = "http://localhost:8080/"
            poll_interval_ms = 500

            [ui]
            keybinding_mode = "arrows"
            split_ratio = 60
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.account.address, "test@example.com");
        assert_eq!(config.account.display_name_or_address(), "Test");
        assert_eq!(config.server.base_url(), "http://localhost:8080");
        assert_eq!(config.server.poll_interval_ms, 500);
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Arrows);
        assert_eq!(config.ui.split_ratio, 60);
    }

    #[test]
    fn test_parse_minimal_config_applies_defaults() {
        let toml = r#"
            [account]
            address = "test@example.com"

            [server]
            url = "http://localhost:8080"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.account.display_name_or_address(), "test@example.com");
        assert_eq!(config.server.poll_interval_ms, 2000);
        assert_eq!(config.ui.keybinding_mode, KeybindingMode::Vim);
        assert_eq!(config.ui.theme, ThemeVariant::Dark);
        assert_eq!(config.ui.date_format, "%b %d");
        assert_eq!(config.ui.split_ratio, 50);
    }
}
