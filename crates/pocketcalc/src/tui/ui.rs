//! TUI rendering
//!
//! A single card: header, pending expression, display, keypad and a key hint
//! line, centered in the terminal.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use super::theme::DEFAULT_THEME;

/// Preferred card width, in cells
pub const CARD_WIDTH: u16 = 36;

/// Preferred card height, in cells
pub const CARD_HEIGHT: u16 = 24;

/// Title shown in the card header
pub const HEADER_TITLE: &str = "▦ Standard";

/// Key hints shown under the keypad
pub const HELP_LINE: &str = "Esc AC · ⌫ del · ⏎ = · ^C quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Card rectangle, centered in the available area
#[must_use]
pub fn card_area(area: Rect) -> Rect {
    let width = area.width.min(CARD_WIDTH);
    let height = area.height.min(CARD_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows inside the card: header, pending, display, spacer, keypad, help
fn card_layout(area: Rect) -> Vec<Rect> {
    let inner = Block::default().borders(Borders::ALL).inner(card_area(area));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Pending expression
            Constraint::Length(1), // Display
            Constraint::Length(1), // Spacer
            Constraint::Min(7),    // Keypad
            Constraint::Length(1), // Help
        ])
        .split(inner)
        .to_vec()
}

/// Screen rectangle of the keypad for a given terminal area.
///
/// Mouse clicks are hit-tested against this.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    card_layout(area)[4]
}

/// Fits display text into `width` cells, keeping the rightmost digits
#[must_use]
pub fn fit_display(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{tail}")
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            HEADER_TITLE,
            Style::default().fg(DEFAULT_THEME.header),
        ))
        .style(Style::default().bg(DEFAULT_THEME.display_bg))
        .render(area, buf);
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        let pending = fit_display(&self.app.pending_expression(), area.width as usize);
        Paragraph::new(Span::styled(
            pending,
            Style::default().fg(DEFAULT_THEME.pending),
        ))
        .alignment(Alignment::Right)
        .style(Style::default().bg(DEFAULT_THEME.display_bg))
        .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = fit_display(self.app.display(), area.width as usize);
        Paragraph::new(Span::styled(
            display,
            Style::default()
                .fg(DEFAULT_THEME.display)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .style(Style::default().bg(DEFAULT_THEME.display_bg))
        .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            HELP_LINE,
            Style::default().fg(DEFAULT_THEME.help),
        )))
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = card_area(area);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(DEFAULT_THEME.card_border))
            .render(card, buf);

        let rows = card_layout(area);
        self.render_header(rows[0], buf);
        self.render_pending(rows[1], buf);
        self.render_display(rows[2], buf);
        KeypadWidget::new(self.app.keypad()).render(rows[4], buf);
        self.render_help(rows[5], buf);
    }
}
