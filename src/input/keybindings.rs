use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::config::KeybindingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,

    // Mail actions
    Open,
    Back,
    Quit,
    Compose,
    Delete,
    ToggleUnread,
    Refresh,

    // Composer
    NextField,
    PrevField,
    Send,
    Cancel,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn new(mode: &KeybindingMode) -> Self {
        let bindings = match mode {
            KeybindingMode::Vim => Self::vim_bindings(),
            KeybindingMode::Arrows => Self::arrow_bindings(),
        };
        Self { bindings }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    /// Bindings shared by both modes
    fn common_bindings(map: &mut HashMap<KeyEvent, Action>) {
        map.insert(Self::key(KeyCode::Enter), Action::Open);
        map.insert(Self::key(KeyCode::Esc), Action::Back);
        map.insert(Self::key(KeyCode::Char('q')), Action::Quit);
        map.insert(Self::key(KeyCode::Char('c')), Action::Compose);
        map.insert(Self::key(KeyCode::Char('d')), Action::Delete);
        map.insert(Self::key(KeyCode::Char('u')), Action::ToggleUnread);
        map.insert(Self::shift(KeyCode::Char('R')), Action::Refresh);

        // Composer controls (checked before text input)
        map.insert(Self::ctrl(KeyCode::Char('s')), Action::Send);
        map.insert(Self::key(KeyCode::Tab), Action::NextField);
        map.insert(Self::key(KeyCode::BackTab), Action::PrevField);
        map.insert(Self::shift(KeyCode::BackTab), Action::PrevField);
    }

    fn vim_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();
        Self::common_bindings(&mut map);

        map.insert(Self::key(KeyCode::Char('j')), Action::Down);
        map.insert(Self::key(KeyCode::Char('k')), Action::Up);
        map.insert(Self::key(KeyCode::Char('g')), Action::Top);
        map.insert(Self::shift(KeyCode::Char('G')), Action::Bottom);
        map.insert(Self::ctrl(KeyCode::Char('d')), Action::PageDown);
        map.insert(Self::ctrl(KeyCode::Char('u')), Action::PageUp);

        map
    }

    fn arrow_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();
        Self::common_bindings(&mut map);

        map.insert(Self::key(KeyCode::Up), Action::Up);
        map.insert(Self::key(KeyCode::Down), Action::Down);
        map.insert(Self::key(KeyCode::Home), Action::Top);
        map.insert(Self::key(KeyCode::End), Action::Bottom);
        map.insert(Self::key(KeyCode::PageUp), Action::PageUp);
        map.insert(Self::key(KeyCode::PageDown), Action::PageDown);
        map.insert(Self::key(KeyCode::Delete), Action::Delete);
        map.insert(Self::key(KeyCode::F(5)), Action::Refresh);

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_bindings_map_list_keys() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        assert_eq!(
            bindings.get(&KeyBindings::key(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            bindings.get(&KeyBindings::key(KeyCode::Enter)),
            Some(Action::Open)
        );
        assert_eq!(bindings.get(&KeyBindings::key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_arrow_bindings_map_cursor_keys() {
        let bindings = KeyBindings::new(&KeybindingMode::Arrows);
        assert_eq!(
            bindings.get(&KeyBindings::key(KeyCode::Down)),
            Some(Action::Down)
        );
        assert_eq!(
            bindings.get(&KeyBindings::key(KeyCode::Delete)),
            Some(Action::Delete)
        );
    }
}
