//! Log subscriber setup
//!
//! The interactive calculator owns the terminal, so it only logs when a
//! log file is given. Headless commands fall back to stderr.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug)]
pub enum LogTarget {
    /// Append to a file
    File(File),
    /// Standard error
    Stderr,
    /// Logging disabled
    Off,
}

impl LogTarget {
    /// Picks the target for `config`; opens the log file if one is set
    pub fn resolve(config: &CliConfig, interactive: bool) -> CliResult<Self> {
        match &config.log_file {
            Some(path) => open_log_file(path).map(Self::File),
            None if interactive => Ok(Self::Off),
            None => Ok(Self::Stderr),
        }
    }
}

fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logging(format!("cannot open {}: {e}", path.display())))
}

/// Filter from `RUST_LOG`, or the verbosity default when unset
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init(config: &CliConfig, interactive: bool) -> CliResult<()> {
    let filter = env_filter(config);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match LogTarget::resolve(config, interactive)? {
        LogTarget::File(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Off => return Ok(()),
    };
    installed.map_err(|e| CliError::logging(e.to_string()))
}
