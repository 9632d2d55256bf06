//! Binary arithmetic operations selected from the keypad

use serde::{Deserialize, Serialize};

/// A binary operator waiting for its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// ASCII operator symbol
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Label printed on the keypad button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operation to `a` and `b`.
    ///
    /// Division by zero is not trapped: it yields an IEEE-754 infinity,
    /// or NaN for `0 / 0`.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
