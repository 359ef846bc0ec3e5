//! Startup wiring: configuration, logging and the initial list

use std::io::Write;

use libtodo::config::resolve_data_path;
use libtodo::logging::{LogFormat, LoggingConfig};
use libtodo::{Config, TodoList};

use crate::cli::Args;
use crate::error::Result;

/// Log file used by the interactive UI when none is configured
pub const DEFAULT_LOG_FILE: &str = "todo-tui.log";

/// Load the config named on the command line, or the default one
pub fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Build logging settings, command-line flags first, then the config file.
///
/// The interactive UI must not write logs over its own screen, so it falls
/// back to a file in the data directory.
pub fn logging_config(args: &Args, config: &Config, interactive: bool) -> Result<LoggingConfig> {
    let format = match &args.log_format {
        Some(format) => format.parse::<LogFormat>().unwrap_or(LogFormat::Text),
        None => config.log_format()?,
    };

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());

    let file = match args.log_file.clone().or_else(|| config.log_file()) {
        Some(file) => Some(file),
        None if interactive => Some(resolve_data_path()?.join(DEFAULT_LOG_FILE)),
        None => None,
    };

    Ok(LoggingConfig::new(format, level, args.verbose).with_file(file))
}

/// Build the starting list from `--item` values.
///
/// Seeds go through the same validation as typed input.
pub fn seed_list(items: &[String]) -> Result<TodoList> {
    let mut list = TodoList::new();
    for item in items {
        list.append(item.as_str())?;
    }
    Ok(list)
}

/// Write the list as numbered lines, or the empty message
pub fn print_list(list: &TodoList, config: &Config, out: &mut impl Write) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "{}", config.ui.empty_message)?;
        return Ok(());
    }

    for (index, item) in list.items().iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use libtodo::{TodoError, ValidationError};

    #[test]
    fn test_seed_list_rejects_blank() {
        let result = seed_list(&["ok".to_string(), "  ".to_string()]);
        assert!(matches!(
            result,
            Err(crate::error::TuiError::Todo(TodoError::Validation(
                ValidationError::EmptyTask
            )))
        ));
    }

    #[test]
    fn test_seed_list_keeps_order() {
        let list = seed_list(&["b".to_string(), "a".to_string()]).unwrap();
        assert_eq!(list.items(), ["b", "a"]);
    }

    #[test]
    fn test_print_list() {
        let list = TodoList::with_items(["buy milk", "write report"]);
        let mut out = Vec::new();

        print_list(&list, &Config::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. buy milk\n2. write report\n"
        );
    }

    #[test]
    fn test_print_empty_list() {
        let mut out = Vec::new();
        print_list(&TodoList::new(), &Config::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No items in the list!\n");
    }

    #[test]
    fn test_flags_override_config_logging() {
        let args = Args::parse_from([
            "todo-tui",
            "--log-format",
            "json",
            "--log-level",
            "trace",
            "--log-file",
            "/tmp/todo.log",
        ]);

        let logging = logging_config(&args, &Config::default(), true).unwrap();

        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(logging.level, "trace");
        assert_eq!(logging.file, Some("/tmp/todo.log".into()));
    }

    #[test]
    fn test_headless_logs_to_stderr_by_default() {
        let args = Args::parse_from(["todo-tui", "--print"]);
        let logging = logging_config(&args, &Config::default(), false).unwrap();
        assert!(logging.file.is_none());
        assert_eq!(logging.format, LogFormat::Text);
    }
}
