//! TUI application state
//!
//! Owns the calculator engine and the keypad. All state is transient: it
//! starts fresh with each app and is gone when the app is dropped.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use crate::core::{CalcInput, Calculator};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    input_handler: InputHandler,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new app showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calculator engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// The "first operand, operator" line
    #[must_use]
    pub fn pending_expression(&self) -> String {
        self.calculator.pending_expression()
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

    /// Applies an input and lights up its button
    pub fn press(&mut self, input: CalcInput) {
        self.calculator.press(input);
        self.keypad.highlight(input);
    }

    /// Applies a key action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(input) => self.press(input),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a key press
    pub fn handle_key(&mut self, event: KeyEvent) {
        let action = self.input_handler.handle_key(event);
        self.apply(action);
    }

    /// Activates the keypad button under a position. Returns the input sent, if any.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<CalcInput> {
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        let input = self.keypad.get_button(index)?.input;
        debug!(x, y, ?input, "keypad click");
        self.press(input);
        Some(input)
    }

    /// Handles a mouse event; only left-button presses activate buttons
    pub fn handle_mouse(&mut self, event: MouseEvent, keypad_area: Rect) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            self.click(keypad_area, event.column, event.row);
        }
    }
}
