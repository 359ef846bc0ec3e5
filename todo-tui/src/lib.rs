//! todo-tui library
//!
//! Exports types and modules for testing and reuse.

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState, Focus};
pub use error::{Result, TuiError};
