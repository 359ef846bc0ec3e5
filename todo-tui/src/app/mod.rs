//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: (State, Action) -> State
//! - Event: terminal input polling

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::{Action, Focus};
pub use reducer::reduce;
pub use state::{AppState, StatusBarState};
