//! Number <-> display text conversion
//!
//! Every computed value written to the display goes through
//! [`NumberFormat::format`], and every display read back goes through
//! [`parse_display`]. All output of `format` parses back.

use serde::{Deserialize, Serialize};

/// Default number of fraction digits kept by [`NumberFormat::Compact`]
pub const DEFAULT_FRACTION_DIGITS: usize = 10;

/// Upper bound for fraction digits (f64 carries ~17 significant digits)
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Magnitude from which compact output switches to scientific notation
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Policy for rendering computed values on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum NumberFormat {
    /// Integral values without a fraction, others rounded to
    /// `max_fraction_digits` with trailing zeros trimmed; very large or
    /// very small magnitudes in scientific notation
    Compact {
        /// Fraction digits kept before trimming
        max_fraction_digits: usize,
    },
    /// Rust's default float rendering (`5.0`, `inf`, `NaN`)
    Platform,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Compact {
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl NumberFormat {
    /// Compact policy, fraction digits clamped to [`MAX_FRACTION_DIGITS`]
    #[must_use]
    pub fn compact(max_fraction_digits: usize) -> Self {
        Self::Compact {
            max_fraction_digits: max_fraction_digits.min(MAX_FRACTION_DIGITS),
        }
    }

    /// Renders `value` as display text
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match *self {
            Self::Compact {
                max_fraction_digits,
            } => format_compact(value, max_fraction_digits.min(MAX_FRACTION_DIGITS)),
            Self::Platform => format!("{value:?}"),
        }
    }
}

fn format_compact(value: f64, fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    // covers -0.0 too
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let smallest_fixed = 10f64.powi(-(fraction_digits as i32));
    if magnitude >= SCIENTIFIC_THRESHOLD || magnitude < smallest_fixed {
        return format!("{value:e}");
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.fraction_digits$}");
    if fixed.contains('.') {
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        // rounding can leave "-0"
        if trimmed == "-0" {
            return "0".to_string();
        }
        trimmed.to_string()
    } else {
        fixed
    }
}

/// Numeric value of display text, `0.0` when the text does not parse
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or_else(|_| {
        tracing::trace!(text, "display text is not a number, reading as 0");
        0.0
    })
}
