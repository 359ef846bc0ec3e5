//! Actions for the reducer pattern
//!
//! Every state transition is described by an action. Raw input arrives as
//! `Key` and is mapped to the higher-level actions by the reducer.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick, nothing to do but redraw
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move keyboard focus between the add form and the list
    ToggleFocus,

    /// Move the list selection down
    SelectNext,

    /// Move the list selection up
    SelectPrev,

    // === Add form ===
    /// Text in the add form changed
    InputChanged(String),

    /// Append the staged input
    Submit,

    // === Item actions ===
    /// Remove the item at an index
    Delete(usize),

    /// Remove the selected item
    DeleteSelected,

    /// Start editing the item at an index
    BeginEdit(usize),

    /// Scratch value of the active edit changed
    EditChanged(String),

    /// Save the active edit
    CommitEdit,

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Which pane receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The add form
    #[default]
    Input,

    /// The item list
    List,
}
