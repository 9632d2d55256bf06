//! Error types for the CLI

use pocketcalc::core::KeyParseError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error, including terminal setup and drawing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key sequence contains a key with no button
    #[error("Invalid keys: {0}")]
    KeyParse(#[from] KeyParseError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("bad arg"));
    }

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("no such directory");
        assert_eq!(
            err.to_string(),
            "Logging setup failed: no such directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_key_parse_error_conversion() {
        let parse_err = pocketcalc::core::parse_keys("1^2").unwrap_err();
        let err: CliError = parse_err.into();
        assert!(matches!(err, CliError::KeyParse(_)));
        assert_eq!(err.to_string(), "Invalid keys: unknown key '^' at position 1");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: CliError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
