//! Terminal events to calculator actions

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::CalcEvent;

/// What the app should do with a terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(CalcEvent),
    /// Left click at a terminal position
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Drop display, stored operand and pending operator
    Reset,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps crossterm events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> KeyAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Reset,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => CalcEvent::from_key(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(CalcEvent::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(CalcEvent::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                x: event.column,
                y: event.row,
            },
            _ => KeyAction::None,
        }
    }
}
