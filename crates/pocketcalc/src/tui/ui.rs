//! Screen layout and rendering
//!
//! ```text
//! ┌ pocketcalc ───────────────────────────────────────────────┐
//! │┌ Display ────────┐┌ Keypad ──────────┐┌ Help ─────────────┐│
//! ││            12.5 ││ [AC] [ ±] ...    ││    0-9 Digits     ││
//! │└─────────────────┘│                  ││ ...               ││
//! │┌ Pending ────────┐│                  ││                   ││
//! ││ 12 +            ││                  ││                   ││
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::parse_display;

/// Title on the outer border
pub const APP_TITLE: &str = " pocketcalc ";

/// Key bindings shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    (".", "Decimal"),
    ("Enter", "Equals"),
    ("Esc", "Clear (AC)"),
    ("n ~", "Toggle sign"),
    ("%", "Percent"),
    ("Ctrl+L", "Reset all"),
    ("q", "Quit"),
];

/// Operator keys line
pub const HELP_OPERATORS: &str = "Ops: + - * x /  = %";

const KEYPAD_WIDTH: u16 = 22;
const HELP_WIDTH: u16 = 24;

/// Renders the calculator and returns the keypad area for hit testing
pub fn render(app: &CalculatorApp, frame: &mut Frame) -> Rect {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
    keypad_area(area)
}

/// Where [`render`] draws the keypad inside a screen of size `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    columns(area)[1]
}

fn columns(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(KEYPAD_WIDTH),
            Constraint::Length(HELP_WIDTH),
        ])
        .areas(area)
}

/// Text that fits in `width` cells, keeping the least significant end
fn visible_tail(text: &str, width: usize) -> &str {
    let len = text.chars().count();
    if len <= width {
        return text;
    }
    let skip = len - width;
    text.char_indices().nth(skip).map_or("", |(i, _)| &text[i..])
}

/// Whole-screen widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the widget for `app`
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();
        let width = usize::from(area.width.saturating_sub(2));

        let style = if parse_display(text).is_finite() {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(visible_tail(text, width), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status_line();
        let color = if self.app.engine().pending().is_some() {
            Color::Yellow
        } else {
            Color::Gray
        };

        Paragraph::new(Span::styled(status, Style::default().fg(color)))
            .block(
                Block::default()
                    .title(" Pending ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let [shortcuts_area, ops_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .areas(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(shortcuts_area, buf);

        Paragraph::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(Color::Cyan),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(ops_area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [main_area, keypad, help_area] = columns(area);

        let [display_area, status_area, _] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .areas(main_area);

        self.render_display(display_area, buf);
        self.render_status(status_area, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        Self::render_help(help_area, buf);
    }
}
