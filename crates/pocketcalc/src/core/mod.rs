//! Calculator core: events, the input state machine and number formatting
//!
//! Nothing in here fails. Text that does not parse reads as `0.0`, and
//! division by zero renders as an IEEE special value.

mod engine;
mod event;
pub mod format;
mod keys;
mod operations;

pub use engine::{CalculatorEngine, EngineMode, EngineSnapshot, INITIAL_DISPLAY, MAX_DISPLAY_LEN};
pub use event::{CalcEvent, Digit, InvalidDigit};
pub use format::{parse_display, NumberFormat};
pub use keys::{parse_keys, KeyParseError};
pub use operations::Operation;

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How computed values are written to the display
    #[serde(default)]
    pub number_format: NumberFormat,
}

impl EngineConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number format
    #[must_use]
    pub const fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}
