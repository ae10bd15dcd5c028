use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::{AppState, View};

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key(key_event, state, bindings)
        }
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    // The composer captures printable keys as text input
    if matches!(state.view, View::Composer { .. }) {
        return handle_composer_input(key, bindings);
    }

    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    InputResult::Continue
}

fn handle_composer_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // Control actions take precedence over text input
    if let Some(action) = bindings.get(&key) {
        match action {
            Action::Send | Action::NextField | Action::PrevField => {
                return InputResult::Action(action);
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char(c) => InputResult::Char(c),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter => InputResult::Char('\n'),
        KeyCode::Tab => InputResult::Action(Action::NextField),
        KeyCode::Esc => InputResult::Action(Action::Cancel),
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Draft;
    use crate::app::state::ComposerField;
    use crate::config::KeybindingMode;
    use crossterm::event::KeyModifiers;

    fn composer_state() -> AppState {
        AppState {
            view: View::Composer {
                draft: Draft::new(),
                field: ComposerField::Recipient,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_printable_keys_become_text_in_composer() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));

        // 'q' quits the inbox but types a letter in the composer
        assert!(matches!(
            handle_input(event.clone(), &AppState::default(), &bindings),
            InputResult::Quit
        ));
        assert!(matches!(
            handle_input(event, &composer_state(), &bindings),
            InputResult::Char('q')
        ));
    }

    #[test]
    fn test_ctrl_s_sends_from_composer() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let event = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert!(matches!(
            handle_input(event, &composer_state(), &bindings),
            InputResult::Action(Action::Send)
        ));
    }
}
