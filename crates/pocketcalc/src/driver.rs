//! One scenario, any front end
//!
//! [`CalculatorDriver`] is implemented by the bare engine and by the
//! terminal app. The `verify_*` functions below are written once against
//! the trait and run against every implementation.

use crate::core::{parse_keys, CalcEvent, CalculatorEngine, KeyParseError, Operation};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocketcalc::driver::CalculatorDriver;
/// use pocketcalc::core::CalculatorEngine;
///
/// let mut engine = CalculatorEngine::new();
/// engine.press_keys("12 × 3 =").unwrap();
/// assert_eq!(CalculatorDriver::display(&engine), "36");
/// ```
pub trait CalculatorDriver {
    /// Presses a single button
    fn press(&mut self, event: CalcEvent);

    /// Presses every key of a key sequence such as `"2+3="`
    fn press_keys(&mut self, keys: &str) -> Result<(), KeyParseError> {
        for event in parse_keys(keys)? {
            self.press(event);
        }
        Ok(())
    }

    /// Current display text
    fn display(&self) -> String;

    /// Operator waiting for Equals
    fn pending(&self) -> Option<Operation>;

    /// Returns to the start state, dropping any pending operation
    fn reset(&mut self);
}

impl CalculatorDriver for CalculatorEngine {
    fn press(&mut self, event: CalcEvent) {
        self.handle(event);
    }

    fn display(&self) -> String {
        CalculatorEngine::display(self).to_string()
    }

    fn pending(&self) -> Option<Operation> {
        CalculatorEngine::pending(self)
    }

    fn reset(&mut self) {
        CalculatorEngine::reset(self);
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcEvent, CalculatorDriver, Operation};
    use crate::tui::CalculatorApp;

    /// Drives the terminal app the way key presses do
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Underlying app, mutable
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: CalcEvent) {
            self.app.press(event);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending(&self) -> Option<Operation> {
            self.app.engine().pending()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====

/// Runs `keys` from the start state and checks the display
fn expect_display<D: CalculatorDriver>(driver: &mut D, keys: &str, expected: &str) {
    driver.reset();
    let pressed = driver.press_keys(keys);
    assert!(pressed.is_ok(), "scenario {keys:?}: {pressed:?}");
    assert_eq!(driver.display(), expected, "keys {keys:?}");
}

/// Four operations, one per scenario
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "2+3=", "5");
    expect_display(driver, "10-4=", "6");
    expect_display(driver, "6×7=", "42");
    expect_display(driver, "20÷4=", "5");
    expect_display(driver, "1÷4=", "0.25");
}

/// Leading zero, separator, sign and length rules
pub fn verify_entry_rules<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5", "5");
    expect_display(driver, "0.5", "0.5");
    expect_display(driver, "1..5", "1.5");
    expect_display(driver, "5±", "-5");
    expect_display(driver, "5±±", "5");
    expect_display(driver, "50%", "0.5");
    expect_display(driver, "1234567890123456789", "123456789012345");
}

/// Equals without operator, operator replacement and the Clear quirk
pub fn verify_state_machine<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "42=", "42");
    assert_eq!(driver.pending(), None);

    expect_display(driver, "9+4×2=", "8");

    expect_display(driver, "8+3C", "0");
    assert_eq!(driver.pending(), Some(Operation::Add));
    assert!(driver.press_keys("1=").is_ok());
    assert_eq!(driver.display(), "9");
    assert_eq!(driver.pending(), None);
}

/// IEEE special values reach the display instead of failing
pub fn verify_special_values<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5÷0=", "Infinity");
    expect_display(driver, "5±÷0=", "-Infinity");
    expect_display(driver, "÷=", "NaN");
}

/// Runs every shared scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_entry_rules(driver);
    verify_state_machine(driver);
    verify_special_values(driver);
}
