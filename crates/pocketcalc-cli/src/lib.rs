//! pocketcalc command-line front end
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc                          # Interactive calculator
//! pocketcalc press '12×3='            # Prints 36
//! pocketcalc --format platform press 2+3=   # Prints 5.0
//! pocketcalc press --json 8+          # Engine state as JSON
//! pocketcalc --log-file calc.log -v   # Debug log while using the keypad
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, Commands, FormatArg, PressArgs};
pub use config::{build_config, CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{event_loop, run_config, run_press, run_tui};
