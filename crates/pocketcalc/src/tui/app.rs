//! TUI application state
//!
//! The app owns the engine and the keypad. Rendering only reads from it.

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::core::{CalcEvent, CalculatorEngine, EngineConfig, EngineMode};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    /// Where the keypad was last drawn, for mouse hit testing
    keypad_area: Option<Rect>,
    last_event: Option<CalcEvent>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app with the default engine configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app with a custom engine configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_config(config),
            ..Self::default()
        }
    }

    /// The engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Last button pressed
    #[must_use]
    pub fn last_event(&self) -> Option<CalcEvent> {
        self.last_event
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records where the keypad widget was drawn
    pub fn set_keypad_area(&mut self, area: Rect) {
        self.keypad_area = Some(area);
    }

    /// Presses a button: forwards to the engine and highlights the key
    pub fn press(&mut self, event: CalcEvent) {
        self.engine.handle(event);
        self.keypad.highlight(event);
        self.last_event = Some(event);
    }

    /// Presses the keypad button under terminal cell (`x`, `y`).
    ///
    /// Returns the event sent, or `None` when the click missed every
    /// button or the keypad has not been drawn yet.
    pub fn click(&mut self, x: u16, y: u16) -> Option<CalcEvent> {
        let area = self.keypad_area?;
        let index = self.keypad.hit_test(area, x, y)?;
        let event = self.keypad.get_button(index)?.event;
        self.press(event);
        Some(event)
    }

    /// Returns to the start state and releases the keypad
    pub fn reset(&mut self) {
        self.engine.reset();
        self.keypad.release_all();
        self.last_event = None;
    }

    /// Applies an input action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.press(event),
            KeyAction::Click { x, y } => {
                if self.click(x, y).is_none() {
                    tracing::trace!(x, y, "click outside keypad buttons");
                }
            }
            KeyAction::Reset => self.reset(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// One-line summary of the pending operation, e.g. `"12 ×"`
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.engine.mode() {
            EngineMode::Entering => "Ready".to_string(),
            EngineMode::Pending(op) => {
                let lhs = self.engine.number_format().format(self.engine.buffer());
                format!("{lhs} {}", op.label())
            }
        }
    }
}
