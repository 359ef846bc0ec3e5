//! Configuration file loading and environment overrides

use libtodo::config::resolve_config_path;
use libtodo::logging::LogFormat;
use libtodo::{Config, ConfigError, TodoError};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn clear_env() {
    for var in [
        "NO_COLOR",
        "TODO_TUI_NO_COLOR",
        "TODO_TUI_TICK_MS",
        "TODO_LOG_LEVEL",
        "TODO_LOG_FORMAT",
        "TODO_TUI_CONFIG",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = Config::default();

    assert!(config.ui.colors);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.empty_message, "No items in the list!");
    assert_eq!(config.ui.input_placeholder, "Enter a task");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.log_format().unwrap(), LogFormat::Text);
    assert!(config.log_file().is_none());
}

#[test]
#[serial]
fn test_partial_file_keeps_defaults() {
    clear_env();
    let file = write_config(
        r#"
[ui]
empty_message = "Nothing to do"
"#,
    );

    let config = Config::load_from_path(file.path()).unwrap();

    assert_eq!(config.ui.empty_message, "Nothing to do");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_full_file() {
    clear_env();
    let file = write_config(
        r#"
[ui]
colors = false
unicode = false
tick_rate_ms = 250
empty_message = "Empty"
input_placeholder = "What next?"

[logging]
level = "debug"
format = "json"
file = "/tmp/todo-tui-test.log"
"#,
    );

    let config = Config::load_from_path(file.path()).unwrap();

    assert!(!config.ui.colors);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.input_placeholder, "What next?");
    assert_eq!(config.log_format().unwrap(), LogFormat::Json);
    assert_eq!(
        config.log_file(),
        Some(std::path::PathBuf::from("/tmp/todo-tui-test.log"))
    );
}

#[test]
#[serial]
fn test_invalid_toml_is_parse_error() {
    clear_env();
    let file = write_config("[ui\ncolors = ");

    let result = Config::load_from_path(file.path());

    assert!(matches!(
        result,
        Err(TodoError::Config(ConfigError::ParseError(_)))
    ));
}

#[test]
#[serial]
fn test_zero_tick_rate_rejected() {
    clear_env();
    let file = write_config("[ui]\ntick_rate_ms = 0\n");

    let result = Config::load_from_path(file.path());

    assert!(matches!(
        result,
        Err(TodoError::Config(ConfigError::InvalidValue { .. }))
    ));
}

#[test]
#[serial]
fn test_unknown_log_format_rejected() {
    clear_env();
    let file = write_config("[logging]\nformat = \"xml\"\n");

    let result = Config::load_from_path(file.path());

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_missing_file_is_read_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();

    let result = Config::load_from_path(&dir.path().join("absent.toml"));

    assert!(matches!(
        result,
        Err(TodoError::Config(ConfigError::ReadError(_)))
    ));
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("TODO_TUI_CONFIG", dir.path().join("none.toml"));

    let config = Config::load().unwrap();
    clear_env();

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_config_path_from_env() {
    clear_env();
    std::env::set_var("TODO_TUI_CONFIG", "/etc/todo/config.toml");
    let path = resolve_config_path().unwrap();
    clear_env();

    assert_eq!(path, std::path::PathBuf::from("/etc/todo/config.toml"));
}

#[test]
#[serial]
fn test_no_color_env_disables_colors() {
    clear_env();
    std::env::set_var("NO_COLOR", "1");
    let config = Config::default().with_env_overrides();
    clear_env();

    assert!(!config.ui.colors);
    assert!(!config.ui.unicode);
}

#[test]
#[serial]
fn test_todo_tui_no_color_env_disables_colors() {
    clear_env();
    std::env::set_var("TODO_TUI_NO_COLOR", "1");
    let config = Config::default().with_env_overrides();
    clear_env();

    assert!(!config.ui.colors);
    assert!(!config.ui.unicode);
}

#[test]
#[serial]
fn test_tick_rate_env_override() {
    clear_env();
    std::env::set_var("TODO_TUI_TICK_MS", "40");
    let config = Config::default().with_env_overrides();
    clear_env();

    assert_eq!(config.ui.tick_rate_ms, 40);
}

#[test]
#[serial]
fn test_invalid_tick_rate_env_ignored() {
    clear_env();
    std::env::set_var("TODO_TUI_TICK_MS", "fast");
    let config = Config::default().with_env_overrides();
    clear_env();

    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
#[serial]
fn test_log_env_overrides() {
    clear_env();
    std::env::set_var("TODO_LOG_LEVEL", "trace");
    std::env::set_var("TODO_LOG_FORMAT", "pretty");
    let config = Config::default().with_env_overrides();
    clear_env();

    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.log_format().unwrap(), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_zero_tick_rate_env_rejected_without_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("TODO_TUI_CONFIG", dir.path().join("none.toml"));
    std::env::set_var("TODO_TUI_TICK_MS", "0");

    let result = Config::load();
    clear_env();

    assert!(matches!(
        result,
        Err(TodoError::Config(ConfigError::InvalidValue { ref field, .. })) if field == "ui.tick_rate_ms"
    ));
}

#[test]
#[serial]
fn test_zero_tick_rate_env_rejected_over_file() {
    clear_env();
    let file = write_config("[ui]\ntick_rate_ms = 250\n");
    std::env::set_var("TODO_TUI_TICK_MS", "0");

    let result = Config::load_from_path(file.path());
    clear_env();

    assert!(matches!(
        result,
        Err(TodoError::Config(ConfigError::InvalidValue { .. }))
    ));
}

#[test]
#[serial]
fn test_unknown_log_format_env_rejected() {
    clear_env();
    let file = write_config("[logging]\nformat = \"json\"\n");
    std::env::set_var("TODO_LOG_FORMAT", "xml");

    let from_file = Config::load_from_path(file.path());
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("TODO_TUI_CONFIG", dir.path().join("none.toml"));
    let without_file = Config::load();
    clear_env();

    for result in [from_file, without_file] {
        assert!(matches!(
            result,
            Err(TodoError::Config(ConfigError::InvalidValue { ref field, .. })) if field == "logging.format"
        ));
    }
}
