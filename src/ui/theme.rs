//! Centralized theming for the TUI
//!
//! Single source of truth for all colors and styles used throughout
//! the application.

use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use crate::config::ThemeVariant;

/// Global theme variant storage (RwLock allows runtime theme switching)
static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

/// Initialize the theme variant (call once at startup)
pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

pub struct Theme;

impl Theme {
    pub fn text() -> Style {
        match current_theme() {
            ThemeVariant::Dark => Style::default().fg(Color::Gray),
            ThemeVariant::HighContrast => Style::default().fg(Color::White),
        }
    }

    pub fn text_muted() -> Style {
        match current_theme() {
            ThemeVariant::Dark => Style::default().fg(Color::DarkGray),
            ThemeVariant::HighContrast => Style::default().fg(Color::Gray),
        }
    }

    /// Unread rows stand out from read ones
    pub fn text_unread() -> Style {
        Self::text().add_modifier(Modifier::BOLD)
    }

    pub fn unread_marker() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn selection() -> Style {
        match current_theme() {
            ThemeVariant::Dark => Style::default().bg(Color::Rgb(60, 60, 80)),
            ThemeVariant::HighContrast => Style::default().bg(Color::Blue).fg(Color::White),
        }
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        match current_theme() {
            ThemeVariant::Dark => Style::default().bg(Color::Rgb(30, 30, 40)).fg(Color::Gray),
            ThemeVariant::HighContrast => Style::default().bg(Color::White).fg(Color::Black),
        }
    }

    pub fn status_connected() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn status_disconnected() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn error_bar() -> Style {
        Style::default().bg(Color::Red).fg(Color::White)
    }

    pub fn help_key() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Self::text_muted()
    }
}
