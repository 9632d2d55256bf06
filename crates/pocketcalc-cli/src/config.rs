//! CLI configuration

use pocketcalc::core::format::MAX_FRACTION_DIGITS;
use pocketcalc::core::{EngineConfig, NumberFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::commands::{Cli, FormatArg};
use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Engine transitions
    Verbose,
    /// Everything, including ignored input
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level; `-q` wins
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Engine settings
    pub engine: EngineConfig,
    /// Log destination; `None` logs to stderr in headless mode only
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set engine configuration
    #[must_use]
    pub const fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}

/// Builds the configuration from parsed arguments
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let number_format = number_format(cli.format, cli.fraction_digits)?;
    let mut config = CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_engine(EngineConfig::new().with_number_format(number_format));
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path);
    }
    Ok(config)
}

fn number_format(format: FormatArg, fraction_digits: Option<usize>) -> CliResult<NumberFormat> {
    match (format, fraction_digits) {
        (FormatArg::Compact, None) => Ok(NumberFormat::default()),
        (FormatArg::Compact, Some(digits)) if digits <= MAX_FRACTION_DIGITS => {
            Ok(NumberFormat::compact(digits))
        }
        (FormatArg::Compact, Some(digits)) => Err(CliError::invalid_argument(format!(
            "--fraction-digits must be at most {MAX_FRACTION_DIGITS}, got {digits}"
        ))),
        (FormatArg::Platform, None) => Ok(NumberFormat::Platform),
        (FormatArg::Platform, Some(_)) => Err(CliError::invalid_argument(
            "--fraction-digits only applies to the compact format",
        )),
    }
}
