//! pocketcalc: a button-driven pocket calculator
//!
//! The engine consumes one button press at a time and keeps the text on
//! the display. There is no expression parser and no precedence: an
//! operator stores the current value, `=` applies it.
//!
//! - [`core`]: events, the input state machine and number formatting
//! - [`driver`]: one trait over every front end, with shared scenarios
//! - `tui`: ratatui front end with a clickable keypad (feature `tui`)
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for event in parse_keys("12 × 3 =").unwrap() {
//!     engine.handle(event);
//! }
//! assert_eq!(engine.display(), "36");
//!
//! // division by zero is a value, not an error
//! engine.handle_all(parse_keys("÷ 0 =").unwrap());
//! assert_eq!(engine.display(), "Infinity");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        parse_keys, CalcEvent, CalculatorEngine, Digit, EngineConfig, EngineMode,
        EngineSnapshot, KeyParseError, NumberFormat, Operation,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
