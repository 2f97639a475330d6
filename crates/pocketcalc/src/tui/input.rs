//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator inputs. Keys with no meaning for
//! the calculator map to [`KeyAction::None`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::CalcInput;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an input to the calculator
    Input(CalcInput),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
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
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => CalcInput::from_char(c).map_or(KeyAction::None, KeyAction::Input),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Input(CalcInput::Backspace),
            KeyCode::Enter => KeyAction::Input(CalcInput::Equals),
            KeyCode::Esc => KeyAction::Input(CalcInput::Clear),
            _ => KeyAction::None,
        }
    }

    /// Returns the canonical key press that produces an input
    #[must_use]
    pub fn key_for(input: CalcInput) -> KeyEvent {
        let code = match input {
            CalcInput::Digit(d) => KeyCode::Char(char::from(b'0' + d.min(9))),
            CalcInput::Decimal => KeyCode::Char('.'),
            CalcInput::Operator(op) => KeyCode::Char(op.symbol()),
            CalcInput::Equals => KeyCode::Enter,
            CalcInput::Clear => KeyCode::Esc,
            CalcInput::Backspace => KeyCode::Backspace,
            CalcInput::Percent => KeyCode::Char('%'),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_input_handler_debug() {
        let handler = InputHandler::new();
        assert!(format!("{:?}", handler).contains("InputHandler"));
    }

    // ===== Calculator keys =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let event = key_event(KeyCode::Char(char::from(b'0' + d)));
            assert_eq!(
                handler.handle_key(event),
                KeyAction::Input(CalcInput::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            let event = key_event(KeyCode::Char(op.symbol()));
            assert_eq!(
                handler.handle_key(event),
                KeyAction::Input(CalcInput::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Input(CalcInput::Decimal)
        );
    }

    #[test]
    fn test_handle_percent() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Input(CalcInput::Percent)
        );
    }

    #[test]
    fn test_handle_equals_and_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Input(CalcInput::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Input(CalcInput::Equals)
        );
    }

    #[test]
    fn test_handle_escape_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Input(CalcInput::Clear)
        );
    }

    #[test]
    fn test_handle_backspace_and_delete() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Input(CalcInput::Backspace)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            KeyAction::Input(CalcInput::Backspace)
        );
    }

    // ===== Ctrl keys =====

    #[test]
    fn test_handle_ctrl_c_and_q() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_digit_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    // ===== Ignored keys =====

    #[test]
    fn test_handle_letters_ignored() {
        let handler = InputHandler::new();
        for c in ['a', 'q', 'x', '^', '('] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::None
            );
        }
    }

    #[test]
    fn test_handle_navigation_ignored() {
        let handler = InputHandler::new();
        for code in [KeyCode::Left, KeyCode::Up, KeyCode::Tab, KeyCode::F(1)] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    // ===== key_for =====

    #[test]
    fn test_key_for_maps_back_to_same_input() {
        let handler = InputHandler::new();
        let mut inputs: Vec<CalcInput> = (0..=9).map(CalcInput::Digit).collect();
        inputs.extend(Operator::ALL.map(CalcInput::Operator));
        inputs.extend([
            CalcInput::Decimal,
            CalcInput::Equals,
            CalcInput::Clear,
            CalcInput::Backspace,
            CalcInput::Percent,
        ]);

        for input in inputs {
            let event = InputHandler::key_for(input);
            assert_eq!(handler.handle_key(event), KeyAction::Input(input));
        }
    }
}
