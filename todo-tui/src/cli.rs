//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo-tui")]
#[command(version, about = "Edit a todo list in the terminal")]
#[command(long_about = r#"Edit a todo list in the terminal.

The list lives for the duration of the session and is not saved.

EXAMPLES:
    # Start with an empty list
    todo-tui

    # Start with a few items
    todo-tui --item "buy milk" --item "write report"

    # Print the seeded list and exit (no terminal UI)
    todo-tui --item "buy milk" --print

EXIT CODES:
    0 - Success
    1 - Error (terminal, configuration)
    3 - Invalid input (blank --item)
"#)]
pub struct Args {
    /// Configuration file (defaults to $TODO_TUI_CONFIG or the XDG config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Add an item before starting; may be repeated
    #[arg(short, long = "item", value_name = "TEXT")]
    pub items: Vec<String>,

    /// Print the list and exit instead of starting the UI
    #[arg(short, long)]
    pub print: bool,

    /// Log format (text, json, pretty); overrides the config file
    #[arg(long, value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "pretty"])]
    pub log_format: Option<String>,

    /// Minimum log level; overrides the config file
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to this file; overrides the config file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
