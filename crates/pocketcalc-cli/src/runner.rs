//! Command execution

use std::io::{self, Write};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocketcalc::core::{parse_keys, CalculatorEngine};
use pocketcalc::tui::{render, CalculatorApp, InputHandler};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Presses the keys on a fresh engine and writes the result to `out`
pub fn run_press<W: Write>(config: &CliConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let keys = args.keys.join(" ");
    let events = parse_keys(&keys)?;

    let mut engine = CalculatorEngine::with_config(config.engine);
    engine.handle_all(events);
    tracing::info!(%keys, display = engine.display(), "keys pressed");

    if args.json {
        let json = serde_json::to_string(&engine.snapshot())?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", engine.display())?;
    }
    Ok(())
}

/// Prints the resolved configuration
pub fn run_config<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    let json = serde_json::to_string_pretty(config)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Runs the interactive calculator until the user quits
pub fn run_tui(config: &CliConfig) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    tracing::info!("terminal ready");

    let mut app = CalculatorApp::with_config(config.engine);
    let result = event_loop(&mut terminal, &mut app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    tracing::info!(display = app.display(), "terminal restored");

    result
}

/// Draws, waits for an event, applies it; stops when the app quits
pub fn event_loop<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
    mut next_event: F,
) -> CliResult<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        let mut keypad = Rect::default();
        terminal.draw(|frame| keypad = render(app, frame))?;
        app.set_keypad_area(keypad);

        let action = input_handler.handle_event(&next_event()?);
        tracing::trace!(?action, "input");
        app.handle_action(action);
    }

    Ok(())
}
