//! The button-press state machine behind the display
//!
//! The engine is either entering a number or holding a left operand with
//! a pending operator:
//!
//! ```text
//!            Operator(op)                     Operator(op2)
//! Entering ---------------> Pending(op) ------------------> Pending(op2)
//!    ^                          |
//!    +--------- Equals ---------+
//! ```
//!
//! Every other event edits the display without changing the mode.

use serde::{Deserialize, Serialize};

use super::event::{CalcEvent, Digit};
use super::format::{parse_display, NumberFormat};
use super::operations::Operation;
use super::EngineConfig;

/// Display shown after start, Clear and operator selection
pub const INITIAL_DISPLAY: &str = "0";

/// Digit entry stops once the display holds this many characters
pub const MAX_DISPLAY_LEN: usize = 15;

const NEGATIVE_SIGN: char = '-';
const DECIMAL_SEPARATOR: char = '.';
const ZERO_INTEGER_PART: &str = "0.";

/// Current state machine mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// No operator selected
    Entering,
    /// Left operand stored, waiting for Equals
    Pending(Operation),
}

/// Point-in-time copy of the engine state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Display text
    pub display: String,
    /// Stored left operand
    pub buffer: f64,
    /// Selected operator, if any
    pub pending: Option<Operation>,
}

/// Calculator state driven one button press at a time
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    buffer: f64,
    pending: Option<Operation>,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine showing "0" with the default number format
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            buffer: 0.0,
            pending: None,
            config,
        }
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Stored left operand (meaningful only while an operator is pending)
    #[must_use]
    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    /// Operator waiting for Equals
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Current state machine mode
    #[must_use]
    pub fn mode(&self) -> EngineMode {
        self.pending
            .map_or(EngineMode::Entering, EngineMode::Pending)
    }

    /// Numeric value of the display, `0.0` when it does not parse
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number format used for computed values
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        self.config.number_format
    }

    /// Copies the current state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display.clone(),
            buffer: self.buffer,
            pending: self.pending,
        }
    }

    /// Restores display, buffer and pending operator to their start values.
    ///
    /// Unlike [`CalcEvent::Clear`], this also drops the stored operand.
    pub fn reset(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.buffer = 0.0;
        self.pending = None;
        tracing::debug!("engine reset");
    }

    /// Applies one button press and returns the new display
    pub fn handle(&mut self, event: CalcEvent) -> &str {
        match event {
            CalcEvent::Clear => self.clear(),
            CalcEvent::ToggleSign => self.toggle_sign(),
            CalcEvent::Percent => self.percent(),
            CalcEvent::Operator(op) => self.select_operator(op),
            CalcEvent::Equals => self.equals(),
            CalcEvent::Dot => self.push_separator(),
            CalcEvent::Digit(digit) => self.push_digit(digit),
        }
        tracing::debug!(
            ?event,
            display = %self.display,
            mode = ?self.mode(),
            "handled event"
        );
        &self.display
    }

    /// Applies a sequence of presses and returns the final display
    pub fn handle_all<I>(&mut self, events: I) -> &str
    where
        I: IntoIterator<Item = CalcEvent>,
    {
        for event in events {
            self.handle(event);
        }
        &self.display
    }

    // Clear only resets the display; a pending operator survives.
    fn clear(&mut self) {
        if let Some(op) = self.pending {
            tracing::debug!(%op, buffer = self.buffer, "clear keeps pending operation");
        }
        self.display = INITIAL_DISPLAY.to_string();
    }

    fn toggle_sign(&mut self) {
        if let Some(unsigned) = self.display.strip_prefix(NEGATIVE_SIGN) {
            self.display = unsigned.to_string();
        } else {
            self.display.insert(0, NEGATIVE_SIGN);
        }
    }

    fn percent(&mut self) {
        self.display = self.render(self.value() / 100.0);
    }

    fn select_operator(&mut self, op: Operation) {
        if let Some(previous) = self.pending {
            tracing::debug!(%previous, %op, "replacing pending operation");
        }
        self.buffer = self.value();
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = Some(op);
    }

    fn equals(&mut self) {
        let Some(op) = self.pending.take() else {
            return;
        };
        let result = op.apply(self.buffer, self.value());
        if !result.is_finite() {
            tracing::debug!(%op, lhs = self.buffer, result, "non-finite result");
        }
        self.display = self.render(result);
        self.buffer = 0.0;
    }

    fn push_separator(&mut self) {
        if !self.display.contains(DECIMAL_SEPARATOR) {
            self.display.push(DECIMAL_SEPARATOR);
        }
    }

    fn push_digit(&mut self, digit: Digit) {
        if self.display.chars().count() >= MAX_DISPLAY_LEN {
            tracing::trace!(display = %self.display, "display full, digit ignored");
            return;
        }
        self.display.push(digit.as_char());
        if !self.display.starts_with(ZERO_INTEGER_PART) {
            if let Some(rest) = self.display.strip_prefix('0') {
                self.display = rest.to_string();
            }
        }
    }

    fn render(&self, value: f64) -> String {
        self.config.number_format.format(value)
    }
}
