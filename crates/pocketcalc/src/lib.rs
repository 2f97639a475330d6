//! Pocketcalc - a pocket calculator for the terminal
//!
//! The engine is a small state machine: digits build an operand as text,
//! operators are applied strictly left to right as they are entered, and
//! results are rounded to eight decimal places. Nothing ever fails; odd
//! inputs are absorbed (a second decimal point is ignored, dividing by zero
//! yields 0).
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for input in parse_key_script("7+3-2=").unwrap() {
//!     calc.press(input);
//! }
//! assert_eq!(calc.display(), "8");
//!
//! // No precedence: evaluated as (2 + 3) * 4
//! let mut calc = Calculator::new();
//! for input in parse_key_script("2+3*4=").unwrap() {
//!     calc.press(input);
//! }
//! assert_eq!(calc.display(), "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::number::{render, render_result, round_to_places, RESULT_PLACES};
    pub use crate::core::{CalcInput, Calculator, Operator, PendingOperation};
    pub use crate::driver::{parse_key_script, CalculatorDriver, EngineDriver, KeyScriptError};

    #[cfg(feature = "tui")]
    pub use crate::driver::{KeypadDriver, TuiDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut driver = EngineDriver::new();
        driver.type_keys("6*7=").unwrap();
        assert_eq!(driver.display(), "42");
    }

    #[test]
    fn test_calculator_direct() {
        let mut calc = Calculator::new();
        calc.press(CalcInput::Digit(9));
        calc.press(CalcInput::Operator(Operator::Divide));
        calc.press(CalcInput::Digit(4));
        calc.press(CalcInput::Equals);
        assert_eq!(calc.display(), "2.25");
    }

    #[test]
    fn test_rendering_helpers() {
        assert_eq!(RESULT_PLACES, 8);
        assert_eq!(render(round_to_places(2.0 / 3.0, RESULT_PLACES)), "0.66666667");
        assert_eq!(render_result(-0.0), "0");
    }
}
