//! pocketcalc: a pocket calculator for the terminal

use clap::Parser;
use pocketcalc_cli::{
    build_config, logging, run_config, run_press, run_tui, Cli, CliResult, Commands,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let command = cli.command.unwrap_or(Commands::Tui);

    logging::init(&config, command.is_interactive())?;
    tracing::debug!(?config, ?command, "starting");

    match command {
        Commands::Tui => run_tui(&config),
        Commands::Press(args) => run_press(&config, &args, &mut io::stdout().lock()),
        Commands::Config => run_config(&config, &mut io::stdout().lock()),
    }
}
