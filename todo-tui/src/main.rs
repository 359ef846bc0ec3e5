//! todo-tui - edit a todo list in the terminal

use clap::Parser;
use todo_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    bootstrap::{load_config, logging_config, print_list, seed_list},
    cli::Args,
    error::Result,
    terminal::{install_panic_hook, with_terminal, Tui},
    ui,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    logging_config(&args, &config, !args.print)?.try_init()?;

    let list = seed_list(&args.items)?;
    tracing::info!(items = list.len(), "starting");

    if args.print {
        return print_list(&list, &config, &mut std::io::stdout().lock());
    }

    install_panic_hook();
    with_terminal(|terminal| run_app(terminal, AppState::with_list(list, config.ui)))
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        if state.should_quit {
            break;
        }
    }

    tracing::info!(items = state.list.len(), "exiting");
    Ok(())
}
