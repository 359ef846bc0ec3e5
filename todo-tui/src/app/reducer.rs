//! Reducer for state transitions
//!
//! `(State, Action) -> State`. The reducer owns the state it is given and
//! hands back the next one; it does no I/O. Business rules stay in
//! `libtodo`, the reducer only routes intents to it and keeps the
//! selection and overlays in step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libtodo::TodoError;

use super::actions::{Action, Focus};
use super::state::{AppState, StatusBarState};

pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::ToggleFocus => {
            let focus = match state.focus {
                Focus::Input => Focus::List,
                Focus::List => Focus::Input,
            };
            AppState { focus, ..state }
        }

        Action::SelectNext => {
            let selected = if state.selected + 1 < state.list.len() {
                state.selected + 1
            } else {
                state.selected
            };
            AppState { selected, ..state }
        }

        Action::SelectPrev => AppState {
            selected: state.selected.saturating_sub(1),
            ..state
        },

        // === Add form ===
        Action::InputChanged(text) => {
            let mut state = state;
            state.list.update_input(text);
            state
        }

        Action::Submit => {
            let mut state = state;
            match state.list.submit() {
                Ok(index) => with_status(state, format!("Added item {}", index + 1)),
                // Shown inline under the add form
                Err(e) if e.is_user_facing() => state,
                Err(e) => contract_violation(state, e),
            }
        }

        // === Item actions ===
        Action::Delete(index) => {
            let mut state = state;
            match state.list.remove(index) {
                Ok(item) => {
                    state.clamp_selection();
                    with_status(state, format!("Removed \"{}\"", item))
                }
                Err(e) => contract_violation(state, e),
            }
        }

        Action::DeleteSelected => {
            if state.list.is_empty() {
                return state;
            }
            let index = state.selected;
            reduce(state, Action::Delete(index))
        }

        Action::BeginEdit(index) => {
            let mut state = state;
            match state.list.begin_edit(index) {
                Ok(()) => AppState {
                    selected: index,
                    focus: Focus::List,
                    status: StatusBarState { message: None },
                    ..state
                },
                Err(e) => contract_violation(state, e),
            }
        }

        Action::EditChanged(text) => {
            let mut state = state;
            state.list.change_scratch(text);
            state
        }

        Action::CommitEdit => {
            let mut state = state;
            match state.list.commit() {
                Ok(Some(index)) => with_status(state, format!("Saved item {}", index + 1)),
                Ok(None) => state,
                Err(e) => contract_violation(state, e),
            }
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => with_status(state, message),

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

fn with_status(state: AppState, message: String) -> AppState {
    AppState {
        status: StatusBarState {
            message: Some(message),
        },
        ..state
    }
}

/// A rejected index means the UI and the list disagree; show it loudly.
fn contract_violation(state: AppState, error: TodoError) -> AppState {
    reduce(state, Action::ShowError(error.to_string()))
}

/// Printable character typed without Ctrl/Alt
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn push_char(text: &str, c: char) -> String {
    let mut text = text.to_string();
    text.push(c);
    text
}

fn pop_char(text: &str) -> String {
    let mut text = text.to_string();
    text.pop();
    text
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    if state.overlay_visible() {
        return state;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        return reduce(state, Action::ToggleFocus);
    }

    match state.focus {
        Focus::Input => handle_input_key(state, key),
        Focus::List if state.list.edit().is_editing() => handle_edit_key(state, key),
        Focus::List => handle_list_key(state, key),
    }
}

/// Keys for the add form
fn handle_input_key(state: AppState, key: KeyEvent) -> AppState {
    if let Some(c) = typed_char(&key) {
        let text = push_char(state.list.pending_input().value(), c);
        return reduce(state, Action::InputChanged(text));
    }

    match key.code {
        KeyCode::Backspace => {
            let text = pop_char(state.list.pending_input().value());
            reduce(state, Action::InputChanged(text))
        }
        KeyCode::Enter => reduce(state, Action::Submit),
        KeyCode::Down if !state.list.is_empty() => reduce(state, Action::ToggleFocus),
        _ => state,
    }
}

/// Keys for the list while no edit is active
fn handle_list_key(state: AppState, key: KeyEvent) -> AppState {
    let has_items = !state.list.is_empty();

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => reduce(state, Action::Quit),
        (KeyCode::Up | KeyCode::Char('k'), _) => reduce(state, Action::SelectPrev),
        (KeyCode::Down | KeyCode::Char('j'), _) => reduce(state, Action::SelectNext),
        (KeyCode::Char('a'), KeyModifiers::NONE) => reduce(state, Action::ToggleFocus),
        (KeyCode::Enter | KeyCode::Char('e'), _) if has_items => {
            let index = state.selected;
            reduce(state, Action::BeginEdit(index))
        }
        (KeyCode::Delete | KeyCode::Char('d'), _) if has_items => {
            reduce(state, Action::DeleteSelected)
        }
        _ => state,
    }
}

/// Keys for the list while an item is being edited
fn handle_edit_key(state: AppState, key: KeyEvent) -> AppState {
    // Ctrl+E on another row starts editing it, dropping the current edit
    if let (KeyCode::Char('e'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        let index = state.selected;
        return reduce(state, Action::BeginEdit(index));
    }

    if let Some(c) = typed_char(&key) {
        let scratch = state.list.edit().scratch().unwrap_or_default();
        let text = push_char(scratch, c);
        return reduce(state, Action::EditChanged(text));
    }

    match key.code {
        KeyCode::Backspace => {
            let scratch = state.list.edit().scratch().unwrap_or_default();
            let text = pop_char(scratch);
            reduce(state, Action::EditChanged(text))
        }
        KeyCode::Enter => reduce(state, Action::CommitEdit),
        KeyCode::Up => reduce(state, Action::SelectPrev),
        KeyCode::Down => reduce(state, Action::SelectNext),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_does_not_touch_clones() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::InputChanged("x".to_string()));

        assert_eq!(state_clone.list.pending_input().value(), "");
        assert_eq!(new_state.list.pending_input().value(), "x");
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_submit_sets_status() {
        let state = reduce(AppState::new(), Action::InputChanged("milk".to_string()));
        let state = reduce(state, Action::Submit);
        assert_eq!(state.status.message.as_deref(), Some("Added item 1"));
    }

    #[test]
    fn test_delete_out_of_range_shows_error_overlay() {
        let state = reduce(AppState::new(), Action::Delete(3));
        assert_eq!(
            state.error.as_deref(),
            Some("Index 3 out of range for list of length 0")
        );
    }

    #[test]
    fn test_delete_selected_on_empty_list_is_noop() {
        let state = reduce(AppState::new(), Action::DeleteSelected);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_typed_char_ignores_control() {
        let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let shift = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(typed_char(&ctrl), None);
        assert_eq!(typed_char(&shift), Some('A'));
    }
}
