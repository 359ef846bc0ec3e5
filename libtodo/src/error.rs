//! Error types for libtodo

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Caller contract violation: the index did not address an item
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TodoError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::Validation(_) => 3,
            TodoError::IndexOutOfRange { .. } => 1,
            TodoError::Config(_) => 1,
        }
    }

    /// Whether the error is meant to be shown to the person using the list.
    ///
    /// Index errors come from a presentation layer rendering stale indices
    /// and are reported to logs instead.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task cannot be empty")]
    EmptyTask,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Could not determine the {0} directory for this platform")]
    DirectoryUnavailable(String),

    #[error("Failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
