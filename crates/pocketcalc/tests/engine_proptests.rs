//! Property-based tests for the input state machine

use pocketcalc::core::{
    parse_display, CalcEvent, CalculatorEngine, Digit, NumberFormat, Operation, MAX_DISPLAY_LEN,
};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9u8).prop_filter_map("decimal digit", Digit::new)
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn event_strategy() -> impl Strategy<Value = CalcEvent> {
    prop_oneof![
        4 => digit_strategy().prop_map(CalcEvent::Digit),
        1 => Just(CalcEvent::Dot),
        1 => Just(CalcEvent::Clear),
        1 => Just(CalcEvent::ToggleSign),
        1 => Just(CalcEvent::Percent),
        1 => Just(CalcEvent::Equals),
        2 => operation_strategy().prop_map(CalcEvent::Operator),
    ]
}

fn finite_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6..1.0e6f64,
        any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ]
}

// ===== Digit entry =====

proptest! {
    /// Digit entry alone never grows the display past the cap
    #[test]
    fn prop_digits_respect_cap(digits in prop::collection::vec(digit_strategy(), 0..40)) {
        let mut engine = CalculatorEngine::new();
        for digit in digits {
            engine.handle(CalcEvent::Digit(digit));
            prop_assert!(engine.display().chars().count() <= MAX_DISPLAY_LEN);
        }
    }

    /// Typed digits appear verbatim once leading zeros are dropped
    #[test]
    fn prop_digits_without_leading_zero(
        first in 1u8..=9u8,
        rest in prop::collection::vec(0u8..=9u8, 0..10),
    ) {
        let mut engine = CalculatorEngine::new();
        let mut expected = first.to_string();
        engine.handle(CalcEvent::digit(first).unwrap());
        for d in rest {
            engine.handle(CalcEvent::digit(d).unwrap());
            expected.push(char::from(b'0' + d));
        }
        prop_assert_eq!(engine.display(), expected.as_str());
    }

    /// Toggling the sign twice restores the display
    #[test]
    fn prop_toggle_sign_involution(digits in prop::collection::vec(digit_strategy(), 1..10)) {
        let mut engine = CalculatorEngine::new();
        for digit in digits {
            engine.handle(CalcEvent::Digit(digit));
        }
        let before = engine.display().to_string();
        engine.handle(CalcEvent::ToggleSign);
        engine.handle(CalcEvent::ToggleSign);
        prop_assert_eq!(engine.display(), before.as_str());
    }
}

// ===== Arbitrary event sequences =====

proptest! {
    /// No sequence of presses produces two decimal separators
    #[test]
    fn prop_single_separator(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut engine = CalculatorEngine::new();
        for event in events {
            let display = engine.handle(event);
            prop_assert!(display.matches('.').count() <= 1, "display {:?}", display);
        }
    }

    /// The display is never empty
    #[test]
    fn prop_display_never_empty(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut engine = CalculatorEngine::new();
        engine.handle_all(events);
        prop_assert!(!engine.display().is_empty());
    }

    /// Equals always leaves the engine without a pending operator
    #[test]
    fn prop_equals_clears_pending(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut engine = CalculatorEngine::new();
        engine.handle_all(events);
        engine.handle(CalcEvent::Equals);
        prop_assert_eq!(engine.pending(), None);
    }

    /// Clear keeps whatever operator was pending
    #[test]
    fn prop_clear_keeps_pending(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut engine = CalculatorEngine::new();
        engine.handle_all(events);
        let pending = engine.pending();
        engine.handle(CalcEvent::Clear);
        prop_assert_eq!(engine.display(), "0");
        prop_assert_eq!(engine.pending(), pending);
    }

    /// Reset returns to the start state from anywhere
    #[test]
    fn prop_reset_from_anywhere(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut engine = CalculatorEngine::new();
        engine.handle_all(events);
        engine.reset();
        prop_assert_eq!(engine.snapshot(), CalculatorEngine::new().snapshot());
    }
}

// ===== Arithmetic and formatting =====

proptest! {
    /// Binary operations agree with f64 arithmetic on the displayed operands
    #[test]
    fn prop_equals_applies_operation(
        a in 0u32..100_000,
        b in 1u32..100_000,
        op in operation_strategy(),
    ) {
        let mut engine = CalculatorEngine::new();
        for c in a.to_string().chars().chain(std::iter::once('?')).chain(b.to_string().chars()) {
            let event = if c == '?' {
                CalcEvent::Operator(op)
            } else {
                CalcEvent::from_key(c).unwrap()
            };
            engine.handle(event);
        }
        engine.handle(CalcEvent::Equals);
        let expected = op.apply(f64::from(a), f64::from(b));
        let shown = parse_display(engine.display());
        let tolerance = expected.abs().max(1.0) * 1e-9;
        prop_assert!((shown - expected).abs() <= tolerance, "{} vs {}", shown, expected);
    }

    /// Every compact rendering reads back as a number close to the input
    #[test]
    fn prop_compact_format_parses_back(value in finite_strategy()) {
        let text = NumberFormat::default().format(value);
        let back: f64 = text.parse().unwrap();
        let tolerance = value.abs() * 1e-9 + 1e-10;
        prop_assert!((back - value).abs() <= tolerance, "{} -> {}", value, text);
    }

    /// Platform rendering is exact
    #[test]
    fn prop_platform_format_is_exact(value in any::<f64>().prop_filter("not NaN", |v| !v.is_nan())) {
        let text = NumberFormat::Platform.format(value);
        let back: f64 = text.parse().unwrap();
        prop_assert_eq!(back, value);
    }
}
