//! Unified calculator driver
//!
//! **Write the scenario once, run it on every front end.** Each front end
//! (the bare engine, the TUI through key events, the TUI through keypad
//! clicks) implements [`CalculatorDriver`], and the `verify_*` scenarios below
//! run unchanged against all of them.

use thiserror::Error;

use crate::core::{CalcInput, Calculator};

/// A key script contained a character with no calculator meaning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key {key:?} at position {position}")]
pub struct KeyScriptError {
    /// The offending character
    pub key: char,
    /// Character offset in the script
    pub position: usize,
}

/// Parses a key script into inputs.
///
/// Besides the typed keys (digits, `.`, `+ - * /`, `=`, `%`) the script uses
/// `c` for AC, `<` for backspace and a newline for equals. Other whitespace is
/// ignored.
pub fn parse_key_script(script: &str) -> Result<Vec<CalcInput>, KeyScriptError> {
    let mut inputs = Vec::new();
    for (position, key) in script.chars().enumerate() {
        let input = match key {
            'c' | 'C' => CalcInput::Clear,
            '<' => CalcInput::Backspace,
            '\n' => CalcInput::Equals,
            k if k.is_whitespace() => continue,
            k => CalcInput::from_char(k).ok_or(KeyScriptError { key: k, position })?,
        };
        inputs.push(input);
    }
    Ok(inputs)
}

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Sends one input through the front end
    fn press(&mut self, input: CalcInput);

    /// Current display text
    fn display(&self) -> String;

    /// Current pending expression line
    fn pending_expression(&self) -> String;

    /// Returns the front end to its initial state
    fn reset(&mut self);

    /// Sends every input of a key script
    fn type_keys(&mut self, script: &str) -> Result<(), KeyScriptError> {
        for input in parse_key_script(script)? {
            self.press(input);
        }
        Ok(())
    }
}

/// Driver for the bare engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    calculator: Calculator,
}

impl EngineDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, input: CalcInput) {
        self.calculator.press(input);
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn pending_expression(&self) -> String {
        self.calculator.pending_expression()
    }

    fn reset(&mut self) {
        self.calculator = Calculator::new();
    }
}

/// TUI drivers
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::{CalcInput, CalculatorDriver};
    use crate::tui::{keypad_area, CalculatorApp, InputHandler};

    /// Drives the TUI app through crossterm key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: CalcInput) {
            self.app.handle_key(InputHandler::key_for(input));
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending_expression(&self) -> String {
            self.app.pending_expression()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::new();
        }
    }

    /// Drives the TUI app by clicking keypad buttons with the mouse
    #[derive(Debug)]
    pub struct KeypadDriver {
        app: CalculatorApp,
        keypad_area: Rect,
    }

    impl Default for KeypadDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl KeypadDriver {
        /// Creates a driver laid out for an 80x24 terminal
        #[must_use]
        pub fn new() -> Self {
            Self::with_screen(Rect::new(0, 0, 80, 24))
        }

        /// Creates a driver laid out for the given screen area
        #[must_use]
        pub fn with_screen(screen: Rect) -> Self {
            Self {
                app: CalculatorApp::new(),
                keypad_area: keypad_area(screen),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for KeypadDriver {
        fn press(&mut self, input: CalcInput) {
            let keypad = self.app.keypad();
            let center = keypad
                .find_button(input)
                .and_then(|index| keypad.button_rect(self.keypad_area, index))
                .map(|rect| (rect.x + rect.width / 2, rect.y + rect.height / 2));

            if let Some((x, y)) = center {
                self.app.click(self.keypad_area, x, y);
            }
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending_expression(&self) -> String {
            self.app.pending_expression()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::new();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::{KeypadDriver, TuiDriver};

// ===== Shared scenarios =====
// These scenarios work with ANY CalculatorDriver implementation

#[allow(clippy::panic)]
fn run<D: CalculatorDriver>(driver: &mut D, script: &str) {
    if let Err(err) = driver.type_keys(script) {
        panic!("invalid key script {script:?}: {err}");
    }
}

/// Digits concatenate, with the initial "0" absorbed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "52");
    assert_eq!(driver.display(), "52");

    driver.reset();
    run(driver, "0007");
    assert_eq!(driver.display(), "7");
}

/// Only the first decimal point of an operand counts
pub fn verify_single_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "3..");
    assert_eq!(driver.display(), "3.");

    driver.reset();
    run(driver, "9+.");
    assert_eq!(driver.display(), "0.");
}

/// An operator followed by equals uses the display as both operands
pub fn verify_equals_reuses_operand<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "5+=");
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.pending_expression(), "");
}

/// Division by zero shows 0
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "8/0=");
    assert_eq!(driver.display(), "0");
}

/// Operators chain strictly left to right
pub fn verify_operator_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "7+3");
    assert_eq!(driver.pending_expression(), "7 +");
    run(driver, "-");
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.pending_expression(), "10 -");
    run(driver, "2=");
    assert_eq!(driver.display(), "8");
}

/// Computed results are rounded to eight decimal places
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "1/3=");
    assert_eq!(driver.display(), "0.33333333");

    driver.reset();
    run(driver, ".1+.2=");
    assert_eq!(driver.display(), "0.3");
}

/// Backspace trims the operand but not a finished one
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "12<");
    assert_eq!(driver.display(), "1");
    run(driver, "<");
    assert_eq!(driver.display(), "0");

    driver.reset();
    run(driver, "12+<");
    assert_eq!(driver.display(), "12");
}

/// Percent divides by 100 and ignores zero
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "50%");
    assert_eq!(driver.display(), "0.5");

    driver.reset();
    run(driver, "%");
    assert_eq!(driver.display(), "0");
}

/// AC resets everything from any state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    run(driver, "7+3c");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.pending_expression(), "");
    // Not waiting: the next digit replaces the initial zero, not a stale operand
    run(driver, "4");
    assert_eq!(driver.display(), "4");
}

/// Runs every scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_single_decimal_point(driver);
    verify_equals_reuses_operand(driver);
    verify_divide_by_zero(driver);
    verify_operator_chaining(driver);
    verify_rounding(driver);
    verify_backspace(driver);
    verify_percent(driver);
    verify_clear(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    // ===== Key scripts =====

    #[test]
    fn test_parse_key_script() {
        let inputs = parse_key_script("1 + 2\n").unwrap();
        assert_eq!(
            inputs,
            vec![
                CalcInput::Digit(1),
                CalcInput::Operator(Operator::Add),
                CalcInput::Digit(2),
                CalcInput::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_key_script_commands() {
        let inputs = parse_key_script("c<%=").unwrap();
        assert_eq!(
            inputs,
            vec![
                CalcInput::Clear,
                CalcInput::Backspace,
                CalcInput::Percent,
                CalcInput::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_key_script_unknown() {
        let err = parse_key_script("12x").unwrap_err();
        assert_eq!(err, KeyScriptError { key: 'x', position: 2 });
        assert_eq!(err.to_string(), "unknown key 'x' at position 2");
    }

    #[test]
    fn test_type_keys_stops_before_applying_invalid_script() {
        let mut driver = EngineDriver::new();
        assert!(driver.type_keys("12?").is_err());
        assert_eq!(driver.display(), "0");
    }

    // ===== Drivers =====

    #[test]
    fn test_engine_driver_all_scenarios() {
        verify_all(&mut EngineDriver::new());
    }

    #[test]
    fn test_engine_driver_reset() {
        let mut driver = EngineDriver::new();
        driver.type_keys("9*").unwrap();
        driver.reset();
        assert_eq!(driver.calculator(), &Calculator::new());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_driver_all_scenarios() {
        verify_all(&mut TuiDriver::new());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_keypad_driver_all_scenarios() {
        verify_all(&mut KeypadDriver::new());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_keypad_driver_highlights_clicked_button() {
        let mut driver = KeypadDriver::new();
        driver.press(CalcInput::Percent);
        let keypad = driver.app().keypad();
        assert_eq!(keypad.pressed_index(), keypad.find_button(CalcInput::Percent));
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_driver_app_access() {
        let mut driver = TuiDriver::new();
        driver.type_keys("42").unwrap();
        assert_eq!(driver.app().display(), "42");
    }
}
