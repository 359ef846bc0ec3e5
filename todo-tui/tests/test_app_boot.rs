//! Test application initialization
//!
//! Verifies that the app starts with correct defaults and picks up
//! configuration and seeded items.

use libtodo::config::UiConfig;
use libtodo::{EditSession, TodoList};
use todo_tui::app::{AppState, Focus};

#[test]
fn test_app_initializes_with_input_focus() {
    let state = AppState::new();

    assert_eq!(state.focus, Focus::Input);
    assert!(!state.should_quit);
    assert_eq!(state.selected, 0);
}

#[test]
fn test_no_overlays_on_boot() {
    let state = AppState::new();

    assert!(!state.help_visible);
    assert!(state.error.is_none());
    assert!(!state.overlay_visible());
}

#[test]
fn test_list_starts_empty_and_idle() {
    let state = AppState::new();

    assert!(state.list.is_empty());
    assert_eq!(state.list.pending_input().value(), "");
    assert!(state.list.error().is_none());
    assert_eq!(state.list.edit(), &EditSession::Idle);
}

#[test]
fn test_with_list_keeps_seeded_items_and_config() {
    let config = UiConfig {
        tick_rate_ms: 250,
        empty_message: "Nothing here".to_string(),
        ..UiConfig::default()
    };

    let state = AppState::with_list(TodoList::with_items(["a", "b"]), config);

    assert_eq!(state.list.items(), ["a", "b"]);
    assert_eq!(state.config.tick_rate_ms, 250);
    assert_eq!(state.config.empty_message, "Nothing here");
}

#[test]
fn test_status_empty_on_boot() {
    let state = AppState::new();
    assert!(state.status.message.is_none());
}
