//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! The list model itself lives in `libtodo`; this layer only adds focus,
//! selection and overlays.

use libtodo::config::UiConfig;
use libtodo::TodoList;

use super::actions::Focus;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Pane receiving typed input
    pub focus: Focus,

    /// Highlighted row in the list
    pub selected: usize,

    /// Help overlay visible?
    pub help_visible: bool,

    /// The todo list and its edit session
    pub list: TodoList,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            selected: 0,
            help_visible: false,
            list: TodoList::new(),
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state around an existing list and UI configuration
    pub fn with_list(list: TodoList, config: UiConfig) -> Self {
        Self {
            list,
            config,
            ..Self::default()
        }
    }

    /// Is any overlay capturing input?
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.error.is_some()
    }

    /// Keep the selection inside the list after it shrinks
    pub(crate) fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
    }
}
