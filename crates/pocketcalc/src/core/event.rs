//! Input events accepted by the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::operations::Operation;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A decimal digit in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

/// Rejected digit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a decimal digit")]
pub struct InvalidDigit(pub u8);

impl Digit {
    /// Creates a digit, or `None` when `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from an ASCII character `'0'..='9'`
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcEvent {
    /// Reset the display to "0"
    Clear,
    /// Flip the leading minus sign
    ToggleSign,
    /// Divide the displayed value by 100
    Percent,
    /// Store the display as left operand and select an operator
    Operator(Operation),
    /// Apply the pending operator
    Equals,
    /// Append the decimal separator
    Dot,
    /// Append a digit
    Digit(Digit),
}

impl CalcEvent {
    /// Digit event for `value`, or `None` when `value > 9`
    #[must_use]
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Label printed on the keypad button
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "AC",
            Self::ToggleSign => "±",
            Self::Percent => "%",
            Self::Operator(op) => op.label(),
            Self::Equals => "=",
            Self::Dot => ".",
            Self::Digit(d) => DIGIT_LABELS[d.value() as usize],
        }
    }

    /// Returns true for the four binary operator events
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

impl From<Digit> for CalcEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for CalcEvent {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}

impl std::fmt::Display for CalcEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
