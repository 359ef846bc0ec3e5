//! Error types for todo-tui
//!
//! Wraps core errors and terminal/IO errors for unified handling in `main`.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core list or configuration error
    #[error("{0}")]
    Todo(#[from] libtodo::TodoError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TuiError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Todo(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
