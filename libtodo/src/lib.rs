//! libtodo - state model for a small todo list editor
//!
//! Holds the ordered item list, the add form's pending input and error,
//! and the single in-place edit session. Rendering and input handling
//! belong to the caller; this crate performs no I/O besides reading its
//! configuration file.

pub mod config;
pub mod edit;
pub mod error;
pub mod list;
pub mod logging;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use edit::EditSession;
pub use error::{ConfigError, Result, TodoError, ValidationError};
pub use list::TodoList;
pub use store::{ListStore, PendingInput};
pub use validation::{is_blank, EMPTY_TASK_MESSAGE};
