//! On-screen keypad
//!
//! Buttons can be clicked with the mouse and light up when the matching key
//! is pressed, so keyboard and mouse use feel the same.
//!
//! ```text
//! [ AC ] [ ⌫ ] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ − ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::Widget,
};

use super::theme::DEFAULT_THEME;
use crate::core::{CalcInput, Operator};

/// Visual category of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Number,
    /// The four operators
    Operator,
    /// AC, backspace and percent
    Action,
    /// The equals button
    Equals,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: &'static str,
    /// Input sent when the button is activated
    pub input: CalcInput,
    /// Visual category
    pub kind: ButtonKind,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, input: CalcInput, kind: ButtonKind) -> Self {
        Self {
            label,
            input,
            kind,
            row: 0,
            col: 0,
            span: 1,
            pressed: false,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        let d = d.min(9);
        Self::new(LABELS[d as usize], CalcInput::Digit(d), ButtonKind::Number)
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        let label = match op {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        };
        Self::new(label, CalcInput::Operator(op), ButtonKind::Operator)
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn decimal() -> Self {
        Self::new(".", CalcInput::Decimal, ButtonKind::Number)
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals() -> Self {
        Self::new("=", CalcInput::Equals, ButtonKind::Equals)
    }

    /// Creates the all-clear button
    #[must_use]
    pub fn clear() -> Self {
        Self::new("AC", CalcInput::Clear, ButtonKind::Action)
    }

    /// Creates the backspace button
    #[must_use]
    pub fn backspace() -> Self {
        Self::new("⌫", CalcInput::Backspace, ButtonKind::Action)
    }

    /// Creates the percent button
    #[must_use]
    pub fn percent() -> Self {
        Self::new("%", CalcInput::Percent, ButtonKind::Action)
    }

    fn at(mut self, row: usize, col: usize) -> Self {
        self.row = row;
        self.col = col;
        self
    }

    fn spanning(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns true if the button covers the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The keypad layout - a 5x4 grid, with 0 covering two cells
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
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
        let buttons = vec![
            // Row 0: AC ⌫ % ÷
            KeypadButton::clear().at(0, 0),
            KeypadButton::backspace().at(0, 1),
            KeypadButton::percent().at(0, 2),
            KeypadButton::operator(Operator::Divide).at(0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::digit(7).at(1, 0),
            KeypadButton::digit(8).at(1, 1),
            KeypadButton::digit(9).at(1, 2),
            KeypadButton::operator(Operator::Multiply).at(1, 3),
            // Row 2: 4 5 6 −
            KeypadButton::digit(4).at(2, 0),
            KeypadButton::digit(5).at(2, 1),
            KeypadButton::digit(6).at(2, 2),
            KeypadButton::operator(Operator::Subtract).at(2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::digit(1).at(3, 0),
            KeypadButton::digit(2).at(3, 1),
            KeypadButton::digit(3).at(3, 2),
            KeypadButton::operator(Operator::Add).at(3, 3),
            // Row 4: 0 0 . =
            KeypadButton::digit(0).at(4, 0).spanning(2),
            KeypadButton::decimal().at(4, 2),
            KeypadButton::equals().at(4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button that sends an input
    #[must_use]
    pub fn find_button(&self, input: CalcInput) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for an input
    pub fn highlight(&mut self, input: CalcInput) {
        self.release_all();
        if let Some(idx) = self.find_button(input) {
            self.press_button(idx);
        }
    }

    /// Index of the highlighted button, if any
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Area inside the keypad border
    #[must_use]
    pub fn inner_area(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }

    /// Size of one grid cell inside an inner area
    fn cell_size(&self, inner: Rect) -> (u16, u16) {
        (
            inner.width / self.cols as u16,
            inner.height / self.rows as u16,
        )
    }

    /// Screen rectangle of a button, given the keypad's outer area
    #[must_use]
    pub fn button_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let btn = self.buttons.get(index)?;
        let inner = Self::inner_area(area);
        let (cell_w, cell_h) = self.cell_size(inner);
        if cell_w == 0 || cell_h == 0 {
            return None;
        }

        Some(Rect {
            x: inner.x + btn.col as u16 * cell_w,
            y: inner.y + btn.row as u16 * cell_h,
            width: cell_w * btn.span as u16,
            height: cell_h,
        })
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = Self::inner_area(area);
        if x < inner.x || y < inner.y {
            return None;
        }

        let (cell_w, cell_h) = self.cell_size(inner);
        if cell_w == 0 || cell_h == 0 {
            return None;
        }

        let col = ((x - inner.x) / cell_w) as usize;
        let row = ((y - inner.y) / cell_h) as usize;

        if row < self.rows && col < self.cols {
            self.index_at(row, col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Keypad::inner_area(area);
        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = self.keypad.button_rect(area, index) else {
                continue;
            };

            // Leave a one-column gutter between neighbours
            let face = Rect {
                width: rect.width.saturating_sub(1).max(1),
                ..rect
            };
            let style = DEFAULT_THEME.button(btn.kind, btn.pressed);
            buf.set_style(face, style);

            let label_width = btn.label.chars().count() as u16;
            let label_x = face.x + face.width.saturating_sub(label_width) / 2;
            let label_y = face.y + face.height / 2;
            buf.set_span(
                label_x,
                label_y,
                &Span::styled(btn.label, style),
                face.width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_inputs() -> Vec<CalcInput> {
        let mut inputs: Vec<CalcInput> = (0..=9).map(CalcInput::Digit).collect();
        inputs.extend(Operator::ALL.map(CalcInput::Operator));
        inputs.extend([
            CalcInput::Decimal,
            CalcInput::Equals,
            CalcInput::Clear,
            CalcInput::Backspace,
            CalcInput::Percent,
        ]);
        inputs
    }

    // ===== KeypadButton tests =====

    #[test]
    fn test_digit_button_creation() {
        for d in 0..=9 {
            let btn = KeypadButton::digit(d);
            assert_eq!(btn.label, d.to_string());
            assert!(!btn.pressed);
            assert_eq!(btn.input, CalcInput::Digit(d));
            assert_eq!(btn.kind, ButtonKind::Number);
        }
    }

    #[test]
    fn test_operator_button_labels() {
        assert_eq!(KeypadButton::operator(Operator::Add).label, "+");
        assert_eq!(KeypadButton::operator(Operator::Subtract).label, "−");
        assert_eq!(KeypadButton::operator(Operator::Multiply).label, "×");
        assert_eq!(KeypadButton::operator(Operator::Divide).label, "÷");
    }

    #[test]
    fn test_action_buttons() {
        assert_eq!(KeypadButton::clear().input, CalcInput::Clear);
        assert_eq!(KeypadButton::backspace().input, CalcInput::Backspace);
        assert_eq!(KeypadButton::percent().input, CalcInput::Percent);
        assert_eq!(KeypadButton::clear().kind, ButtonKind::Action);
        assert_eq!(KeypadButton::equals().kind, ButtonKind::Equals);
    }

    #[test]
    fn test_button_covers_span() {
        let btn = KeypadButton::digit(0).at(4, 0).spanning(2);
        assert!(btn.covers(4, 0));
        assert!(btn.covers(4, 1));
        assert!(!btn.covers(4, 2));
        assert!(!btn.covers(3, 0));
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::digit(5);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    // ===== Keypad layout =====

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_rows() {
        let keypad = Keypad::new();
        let labels = |row: usize| -> Vec<&str> {
            (0..4)
                .map(|col| keypad.get_button_at(row, col).unwrap().label)
                .collect()
        };
        assert_eq!(labels(0), ["AC", "⌫", "%", "÷"]);
        assert_eq!(labels(1), ["7", "8", "9", "×"]);
        assert_eq!(labels(2), ["4", "5", "6", "−"]);
        assert_eq!(labels(3), ["1", "2", "3", "+"]);
        assert_eq!(labels(4), ["0", "0", ".", "="]);
    }

    #[test]
    fn test_keypad_every_cell_covered_once() {
        let keypad = Keypad::new();
        for row in 0..5 {
            for col in 0..4 {
                let count = keypad.buttons().filter(|b| b.covers(row, col)).count();
                assert_eq!(count, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button(100).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_every_input_has_a_button() {
        let keypad = Keypad::new();
        for input in all_inputs() {
            assert!(keypad.find_button(input).is_some(), "no button for {input:?}");
        }
    }

    // ===== Pressed state =====

    #[test]
    fn test_highlight_single_button() {
        let mut keypad = Keypad::new();
        keypad.press_button(0);
        keypad.highlight(CalcInput::Digit(5));
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
        assert_eq!(
            keypad.pressed_index(),
            keypad.find_button(CalcInput::Digit(5))
        );
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::new();
        keypad.press_button(3);
        keypad.press_button(7);
        keypad.release_all();
        assert_eq!(keypad.pressed_index(), None);
    }

    // ===== Geometry =====

    #[test]
    fn test_button_rect_zero_spans_two_cells() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 34, 17);
        let zero = keypad.find_button(CalcInput::Digit(0)).unwrap();
        let dot = keypad.find_button(CalcInput::Decimal).unwrap();
        let zero_rect = keypad.button_rect(area, zero).unwrap();
        let dot_rect = keypad.button_rect(area, dot).unwrap();
        assert_eq!(zero_rect.width, dot_rect.width * 2);
        assert_eq!(zero_rect.x + zero_rect.width, dot_rect.x);
    }

    #[test]
    fn test_hit_test_center_of_every_button() {
        let keypad = Keypad::new();
        let area = Rect::new(3, 2, 34, 17);
        for index in 0..keypad.button_count() {
            let rect = keypad.button_rect(area, index).unwrap();
            let x = rect.x + rect.width / 2;
            let y = rect.y + rect.height / 2;
            assert_eq!(keypad.hit_test(area, x, y), Some(index));
        }
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 34, 17);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 10, 10).is_none()); // border
        assert!(keypad.hit_test(area, 200, 200).is_none());
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1).is_none());
    }

    // ===== KeypadWidget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 34, 17);
        let mut buf = Buffer::empty(area);

        KeypadWidget::new(&keypad).render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("AC"));
        assert!(content.contains('7'));
        assert!(content.contains('÷'));
        assert!(content.contains('='));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        // Should not panic
        KeypadWidget::new(&keypad).render(area, &mut buf);
    }

    #[test]
    fn test_keypad_widget_pressed_style_differs() {
        let mut keypad = Keypad::new();
        let area = Rect::new(0, 0, 34, 17);
        let seven = keypad.find_button(CalcInput::Digit(7)).unwrap();
        let rect = keypad.button_rect(area, seven).unwrap();

        let mut normal = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut normal);

        keypad.press_button(seven);
        let mut pressed = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut pressed);

        let pos = (rect.x, rect.y);
        assert_ne!(normal[pos].bg, pressed[pos].bg);
    }
}
