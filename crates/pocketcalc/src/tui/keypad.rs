//! Clickable keypad widget
//!
//! Same grid as the phone calculator this app imitates:
//!
//! ```text
//! [AC] [ ±] [ %] [ ÷]
//! [ 7] [ 8] [ 9] [ ×]
//! [ 4] [ 5] [ 6] [ -]
//! [ 1] [ 2] [ 3] [ +]
//! [ 0]      [ .] [ =]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{CalcEvent, Digit, Operation};

/// Colour class of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// AC, ± and %
    Symbol,
    /// Digits, separator and equals
    Number,
    /// The four operators
    Action,
}

impl ButtonStyle {
    /// Terminal style for a released button
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Self::Symbol => Style::default().fg(Color::Black).bg(Color::Gray),
            Self::Number => Style::default().fg(Color::White).bg(Color::DarkGray),
            Self::Action => Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(255, 149, 0))
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Event sent to the engine
    pub event: CalcEvent,
    /// Colour class
    pub style: ButtonStyle,
    /// Whether the button is highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(event: CalcEvent, style: ButtonStyle) -> Self {
        Self {
            label: event.label(),
            event,
            style,
            pressed: false,
        }
    }

    /// Digit button
    #[must_use]
    pub fn digit(digit: Digit) -> Self {
        Self::new(CalcEvent::Digit(digit), ButtonStyle::Number)
    }

    /// Operator button
    #[must_use]
    pub fn operator(op: Operation) -> Self {
        Self::new(CalcEvent::Operator(op), ButtonStyle::Action)
    }

    /// AC button
    #[must_use]
    pub fn clear() -> Self {
        Self::new(CalcEvent::Clear, ButtonStyle::Symbol)
    }

    /// ± button
    #[must_use]
    pub fn toggle_sign() -> Self {
        Self::new(CalcEvent::ToggleSign, ButtonStyle::Symbol)
    }

    /// % button
    #[must_use]
    pub fn percent() -> Self {
        Self::new(CalcEvent::Percent, ButtonStyle::Symbol)
    }

    /// Decimal separator button
    #[must_use]
    pub fn dot() -> Self {
        Self::new(CalcEvent::Dot, ButtonStyle::Number)
    }

    /// = button
    #[must_use]
    pub fn equals() -> Self {
        Self::new(CalcEvent::Equals, ButtonStyle::Number)
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

fn digit_button(value: u8) -> Option<KeypadButton> {
    Digit::new(value).map(KeypadButton::digit)
}

/// The 5x4 button grid; one cell in the bottom row is empty
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Cells in row-major order
    cells: Vec<Option<KeypadButton>>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let cells = vec![
            Some(KeypadButton::clear()),
            Some(KeypadButton::toggle_sign()),
            Some(KeypadButton::percent()),
            Some(KeypadButton::operator(Operation::Divide)),
            digit_button(7),
            digit_button(8),
            digit_button(9),
            Some(KeypadButton::operator(Operation::Multiply)),
            digit_button(4),
            digit_button(5),
            digit_button(6),
            Some(KeypadButton::operator(Operation::Subtract)),
            digit_button(1),
            digit_button(2),
            digit_button(3),
            Some(KeypadButton::operator(Operation::Add)),
            digit_button(0),
            None,
            Some(KeypadButton::dot()),
            Some(KeypadButton::equals()),
        ];

        Self {
            cells,
            cols: 4,
            rows: 5,
        }
    }

    /// Number of buttons (empty cells excluded)
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button in cell `index` (row-major)
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Button at `row`, `col`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.get_button(row * self.cols + col)
        } else {
            None
        }
    }

    /// Cell index of the button with `label`
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|b| b.label == label))
    }

    /// Cell index of the button that sends `event`
    #[must_use]
    pub fn find_button_by_event(&self, event: CalcEvent) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|b| b.event == event))
    }

    /// Marks the button in cell `index` as pressed
    pub fn press_button(&mut self, index: usize) {
        if let Some(Some(button)) = self.cells.get_mut(index) {
            button.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for button in self.cells.iter_mut().flatten() {
            button.set_pressed(false);
        }
    }

    /// Highlights only the button that sends `event`
    pub fn highlight(&mut self, event: CalcEvent) {
        self.release_all();
        if let Some(index) = self.find_button_by_event(event) {
            self.press_button(index);
        }
    }

    /// Iterates over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.cells.iter().flatten()
    }

    /// Iterates over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|button| ((i / self.cols, i % self.cols), button))
        })
    }

    /// Converts a terminal position inside `area` to a cell index.
    ///
    /// `area` is the full widget area including its border. Clicks on the
    /// border return `None`; clicks on the empty cell return its index,
    /// for which [`Self::get_button`] yields `None`.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        if rel_x == 0
            || rel_y == 0
            || rel_x >= area.width.saturating_sub(1)
            || rel_y >= area.height.saturating_sub(1)
        {
            return None;
        }

        let (btn_width, btn_height) = self.button_size(area);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    fn button_size(&self, area: Rect) -> (u16, u16) {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        (
            inner_width / self.cols as u16,
            inner_height / self.rows as u16,
        )
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget borrowing `keypad`
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let (btn_width, btn_height) = self.keypad.button_size(area);
        if btn_width < 4 || btn_height == 0 {
            return;
        }

        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        for ((row, col), button) in self.keypad.buttons_with_positions() {
            let x = inner_x + col as u16 * btn_width;
            let y = inner_y + row as u16 * btn_height + btn_height / 2;

            let style = if button.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                button.style.style()
            };

            let label = format!("[{:>2}]", button.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            buf.set_string(label_x, y, label, style);
        }
    }
}
