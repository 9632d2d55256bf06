//! Key symbols to engine events
//!
//! Accepts the symbols printed on the keypad (`AC ± % ÷ × - + = .`) and
//! their ASCII stand-ins, so a sequence such as `"12×3="` or `"12*3="`
//! can be replayed against the engine.

use thiserror::Error;

use super::event::{CalcEvent, Digit};
use super::operations::Operation;

/// Failure to read a key sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// A character with no matching button
    #[error("unknown key '{key}' at position {position}")]
    UnknownKey {
        /// Offending character
        key: char,
        /// Character index in the input
        position: usize,
    },
}

impl CalcEvent {
    /// Maps a single key symbol to its event
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        if let Some(d) = Digit::from_char(key) {
            return Some(Self::Digit(d));
        }
        let event = match key {
            '.' | ',' => Self::Dot,
            '+' => Self::Operator(Operation::Add),
            '-' | '−' => Self::Operator(Operation::Subtract),
            '*' | 'x' | 'X' | '×' => Self::Operator(Operation::Multiply),
            '/' | '÷' => Self::Operator(Operation::Divide),
            '%' => Self::Percent,
            '=' => Self::Equals,
            'c' | 'C' => Self::Clear,
            '~' | 'n' | 'N' | '±' => Self::ToggleSign,
            _ => return None,
        };
        Some(event)
    }
}

/// Parses a key sequence into events.
///
/// Whitespace is skipped. `AC` is read as one Clear key.
pub fn parse_keys(input: &str) -> Result<Vec<CalcEvent>, KeyParseError> {
    let mut events = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some((position, key)) = chars.next() {
        if key.is_whitespace() {
            continue;
        }
        if key == 'A' && matches!(chars.peek(), Some((_, 'C'))) {
            chars.next();
            events.push(CalcEvent::Clear);
            continue;
        }
        let event = CalcEvent::from_key(key).ok_or(KeyParseError::UnknownKey { key, position })?;
        events.push(event);
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> CalcEvent {
        CalcEvent::digit(d).unwrap()
    }

    #[test]
    fn test_from_key_digits() {
        for c in '0'..='9' {
            let expected = digit(c.to_digit(10).unwrap() as u8);
            assert_eq!(CalcEvent::from_key(c), Some(expected));
        }
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(
            CalcEvent::from_key('+'),
            Some(CalcEvent::Operator(Operation::Add))
        );
        assert_eq!(
            CalcEvent::from_key('-'),
            Some(CalcEvent::Operator(Operation::Subtract))
        );
        for key in ['*', 'x', 'X', '×'] {
            assert_eq!(
                CalcEvent::from_key(key),
                Some(CalcEvent::Operator(Operation::Multiply))
            );
        }
        for key in ['/', '÷'] {
            assert_eq!(
                CalcEvent::from_key(key),
                Some(CalcEvent::Operator(Operation::Divide))
            );
        }
    }

    #[test]
    fn test_from_key_functions() {
        assert_eq!(CalcEvent::from_key('.'), Some(CalcEvent::Dot));
        assert_eq!(CalcEvent::from_key(','), Some(CalcEvent::Dot));
        assert_eq!(CalcEvent::from_key('%'), Some(CalcEvent::Percent));
        assert_eq!(CalcEvent::from_key('='), Some(CalcEvent::Equals));
        assert_eq!(CalcEvent::from_key('c'), Some(CalcEvent::Clear));
        assert_eq!(CalcEvent::from_key('±'), Some(CalcEvent::ToggleSign));
        assert_eq!(CalcEvent::from_key('~'), Some(CalcEvent::ToggleSign));
    }

    #[test]
    fn test_from_key_unknown() {
        for key in ['a', '(', '^', '#', 'A'] {
            assert_eq!(CalcEvent::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_every_label_maps_back() {
        let events = [
            CalcEvent::ToggleSign,
            CalcEvent::Percent,
            CalcEvent::Equals,
            CalcEvent::Dot,
            CalcEvent::Operator(Operation::Add),
            CalcEvent::Operator(Operation::Subtract),
            CalcEvent::Operator(Operation::Multiply),
            CalcEvent::Operator(Operation::Divide),
        ];
        for event in events {
            let key = event.label().chars().next().unwrap();
            assert_eq!(CalcEvent::from_key(key), Some(event));
        }
        assert_eq!(parse_keys(CalcEvent::Clear.label()), Ok(vec![CalcEvent::Clear]));
    }

    #[test]
    fn test_parse_keys_sequence() {
        let events = parse_keys("12 + 3 =").unwrap();
        assert_eq!(
            events,
            vec![
                digit(1),
                digit(2),
                CalcEvent::Operator(Operation::Add),
                digit(3),
                CalcEvent::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_keys_ac_word() {
        assert_eq!(
            parse_keys("5AC7").unwrap(),
            vec![digit(5), CalcEvent::Clear, digit(7)]
        );
    }

    #[test]
    fn test_parse_keys_empty() {
        assert_eq!(parse_keys("").unwrap(), Vec::new());
        assert_eq!(parse_keys("   ").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_keys_unknown_reports_position() {
        let err = parse_keys("1+(2)").unwrap_err();
        assert_eq!(
            err,
            KeyParseError::UnknownKey {
                key: '(',
                position: 2
            }
        );
        assert_eq!(err.to_string(), "unknown key '(' at position 2");
    }

    #[test]
    fn test_parse_keys_lone_a_is_unknown() {
        assert!(matches!(
            parse_keys("A5"),
            Err(KeyParseError::UnknownKey { key: 'A', .. })
        ));
    }
}
