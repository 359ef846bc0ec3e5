//! Configuration management for the todo editor
//!
//! Only presentation and logging settings live here. The list itself is
//! never written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Use colors?
    pub colors: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Shown in place of the list when it has no items
    pub empty_message: String,

    /// Placeholder for the add form
    pub input_placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: String,
    /// Log file path; `~` is expanded
    pub file: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors: true,
            unicode: true,
            tick_rate_ms: 100,
            empty_message: "No items in the list!".to_string(),
            input_placeholder: "Enter a task".to_string(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text.to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Self::default().with_env_overrides().validated();
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.with_env_overrides().validated()
    }

    /// Apply environment variable overrides on top of file values.
    ///
    /// Values are not checked here; loading validates the merged result.
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("TODO_TUI_NO_COLOR").is_some()
        {
            self.ui.colors = false;
            self.ui.unicode = false;
        }

        if let Some(tick) = std::env::var("TODO_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.tick_rate_ms = tick;
        }

        if let Ok(level) = std::env::var("TODO_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(format) = std::env::var("TODO_LOG_FORMAT") {
            self.logging.format = format;
        }

        self
    }

    /// Parsed log format
    pub fn log_format(&self) -> Result<LogFormat> {
        self.logging.format.parse().map_err(|message| {
            ConfigError::InvalidValue {
                field: "logging.format".to_string(),
                message,
            }
            .into()
        })
    }

    /// Log file path with `~` expanded
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }

    /// Check the merged file and environment values
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.tick_rate_ms".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }
        self.log_format()?;
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TODO_TUI_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::DirectoryUnavailable("config".to_string()))?;

    Ok(config_dir.join("todo-tui").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::DirectoryUnavailable("data".to_string()))?;

    Ok(data_dir.join("todo-tui"))
}
