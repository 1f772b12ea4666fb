/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// While a form field is being edited every key goes to the edit buffer,
/// so digits and `q` never switch tabs or quit mid-edit.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::action::Action;
use super::state::AppState;
use super::types::Tab;

/// Handle keys while a form field is being edited
fn handle_edit_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Enter => Some(Action::CommitEdit),
        KeyCode::Esc => Some(Action::CancelEdit),
        KeyCode::Backspace => Some(Action::EditBackspace),
        KeyCode::Up => Some(Action::SelectPrevField),
        KeyCode::Down | KeyCode::Tab => Some(Action::SelectNextField),
        KeyCode::Char(c) => Some(Action::EditChar(c)),
        _ => None,
    }
}

/// Handle global keys that work on every tab
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('1') => Some(Action::NavigateTab(Tab::Planner)),
        KeyCode::Char('2') => Some(Action::NavigateTab(Tab::Lanes)),
        KeyCode::Char('3') => Some(Action::NavigateTab(Tab::Network)),
        KeyCode::Left => Some(Action::NavigateTabLeft),
        KeyCode::Right => Some(Action::NavigateTabRight),
        _ => None,
    }
}

/// Handle Planner tab keys when not editing
fn handle_planner_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::SelectPrevField),
        KeyCode::Down | KeyCode::Tab => Some(Action::SelectNextField),
        KeyCode::Enter | KeyCode::Char('e') => Some(Action::StartEdit),
        KeyCode::Char('p') => Some(Action::CyclePreset),
        KeyCode::Char('r') => Some(Action::ResetForm),
        _ => None,
    }
}

/// Convert a key event into an action for the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if state.form.is_editing() {
        debug!("KEY: {:?} routed to edit buffer", key.code);
        return handle_edit_keys(key.code);
    }

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    match state.navigation.current_tab {
        Tab::Planner => handle_planner_keys(key.code),
        Tab::Lanes | Tab::Network => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editing_state() -> AppState {
        let mut state = AppState::default();
        state.form.editing = Some(String::new());
        state
    }

    #[test]
    fn test_quit_keys() {
        let state = AppState::default();
        assert_eq!(key_to_action(key(KeyCode::Char('q')), &state), Some(Action::Quit));
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let state = AppState::default();
        assert_eq!(
            key_to_action(key(KeyCode::Char('3')), &state),
            Some(Action::NavigateTab(Tab::Network))
        );
    }

    #[test]
    fn test_planner_keys() {
        let state = AppState::default();
        assert_eq!(key_to_action(key(KeyCode::Enter), &state), Some(Action::StartEdit));
        assert_eq!(key_to_action(key(KeyCode::Down), &state), Some(Action::SelectNextField));
        assert_eq!(key_to_action(key(KeyCode::Char('p')), &state), Some(Action::CyclePreset));
    }

    #[test]
    fn test_planner_keys_ignored_on_other_tabs() {
        let mut state = AppState::default();
        state.navigation.current_tab = Tab::Lanes;
        assert_eq!(key_to_action(key(KeyCode::Enter), &state), None);
        assert_eq!(key_to_action(key(KeyCode::Char('p')), &state), None);
    }

    #[test]
    fn test_editing_captures_digits_and_q() {
        let state = editing_state();
        assert_eq!(key_to_action(key(KeyCode::Char('2')), &state), Some(Action::EditChar('2')));
        assert_eq!(key_to_action(key(KeyCode::Char('q')), &state), Some(Action::EditChar('q')));
        assert_eq!(key_to_action(key(KeyCode::Enter), &state), Some(Action::CommitEdit));
        assert_eq!(key_to_action(key(KeyCode::Esc), &state), Some(Action::CancelEdit));
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let state = editing_state();
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            Some(Action::Quit)
        );
    }
}
