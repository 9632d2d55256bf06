//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pocketcalc: a pocket calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// How results are written to the display
    #[arg(long, value_enum, default_value = "compact", global = true)]
    pub format: FormatArg,

    /// Maximum digits after the decimal point (compact format, 0-17)
    #[arg(long, global = true)]
    pub fraction_digits: Option<usize>,

    /// Append log output to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive calculator)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive calculator with a clickable keypad
    Tui,

    /// Press a key sequence and print the display
    Press(PressArgs),

    /// Show the resolved configuration as JSON
    Config,
}

impl Commands {
    /// Whether the command takes over the terminal
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Tui)
    }
}

/// Arguments for the press command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PressArgs {
    /// Keys to press, e.g. `12×3=`; multiple arguments are joined
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the full engine state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Number format choice
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Shortest readable text: 5, 0.25, Infinity
    #[default]
    Compact,
    /// Rust float formatting: 5.0, 0.25, inf
    Platform,
}
