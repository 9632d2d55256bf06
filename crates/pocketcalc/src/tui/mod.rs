//! Terminal front end
//!
//! [`CalculatorApp`] holds the state, [`InputHandler`] turns terminal
//! events into [`KeyAction`]s and [`render`] draws one frame.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonStyle, Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, APP_TITLE};
