//! Terminal management
//!
//! Raw mode and the alternate screen are always undone, including on panic.

use crate::error::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
///
/// If any later step fails, raw mode is disabled again before returning.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let terminal = undo_on_err(enter_screen(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    tracing::debug!("terminal initialized");
    Ok(terminal)
}

fn enter_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Run `f` on a fresh terminal and always restore it afterwards.
///
/// An error from `f` wins over an error from restoring.
pub fn with_terminal<T>(f: impl FnOnce(&mut Tui) -> Result<T>) -> Result<T> {
    let mut terminal = setup_terminal()?;
    let result = f(&mut terminal);
    let restored = restore_terminal(terminal);
    keep_first_error(result, restored)
}

fn undo_on_err<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn keep_first_error<T>(result: Result<T>, restored: Result<()>) -> Result<T> {
    match (result, restored) {
        (Err(e), Err(restore_error)) => {
            tracing::warn!(error = %restore_error, "failed to restore terminal");
            Err(e)
        }
        (result, restored) => restored.and(result),
    }
}

/// Leave the alternate screen, disable raw mode and show the cursor again
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    tracing::debug!("terminal restored");
    Ok(())
}

/// Install panic hook to restore terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}
