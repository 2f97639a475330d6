//! Calculator engine: the input-and-arithmetic state machine
//!
//! Inputs are applied one at a time and never fail. Malformed sequences
//! (a second decimal point, backspace right after an operator, dividing by
//! zero) fall back to a no-op or a defined value.

pub mod number;
mod operations;

pub use operations::Operator;

use tracing::{debug, trace};

use number::{parse_operand, render, render_result};

/// Display text after a clear
pub const INITIAL_DISPLAY: &str = "0";

/// A single discrete input, from a key press or a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcInput {
    /// A digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything (AC)
    Clear,
    /// Remove the last entered character
    Backspace,
    /// Divide the display by 100
    Percent,
}

impl CalcInput {
    /// Maps a typed character to an input, if it is one
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

/// Operand and operator captured when an operator was pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// First operand, as it was displayed
    pub operand: String,
    /// Operator awaiting the second operand
    pub operator: Operator,
}

/// Pocket calculator state
///
/// The first operand and the operator are always set and cleared together,
/// so they are held as one optional [`PendingOperation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    display: String,
    pending: Option<PendingOperation>,
    waiting_for_second_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator showing "0" with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            waiting_for_second_operand: false,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Stored first operand, if an operation is pending
    #[must_use]
    pub fn first_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    /// Pending operator, if any
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Whether the next digit starts a fresh operand
    #[must_use]
    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// The small "first operand, operator" line, empty when nothing is pending
    #[must_use]
    pub fn pending_expression(&self) -> String {
        match &self.pending {
            Some(p) => format!("{} {}", p.operand, p.operator.symbol()),
            None => String::new(),
        }
    }

    /// Applies one input
    pub fn press(&mut self, input: CalcInput) {
        match input {
            CalcInput::Digit(d) => self.input_digit(d),
            CalcInput::Decimal => self.input_decimal(),
            CalcInput::Operator(op) => self.perform_operation(op),
            CalcInput::Equals => self.equals(),
            CalcInput::Clear => self.clear(),
            CalcInput::Backspace => self.backspace(),
            CalcInput::Percent => self.percent(),
        }
        trace!(
            ?input,
            display = %self.display,
            pending = %self.pending_expression(),
            waiting = self.waiting_for_second_operand,
            "input applied"
        );
    }

    /// Enters a digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.waiting_for_second_operand {
            self.display = ch.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// Enters a decimal point; at most one per operand
    pub fn input_decimal(&mut self) {
        if self.waiting_for_second_operand {
            self.display = "0.".to_string();
            self.waiting_for_second_operand = false;
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Resets all state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Removes the last display character; no-op right after an operator or equals
    pub fn backspace(&mut self) {
        if self.waiting_for_second_operand {
            return;
        }

        self.display.pop();
        // A bare sign is not a number
        if self.display.is_empty() || self.display == "-" {
            self.display = INITIAL_DISPLAY.to_string();
        }
    }

    /// Selects the next operator, first resolving any pending one.
    ///
    /// Pressing operators back to back resolves the pending operation with the
    /// displayed value as the second operand, then switches to the new operator.
    pub fn perform_operation(&mut self, next: Operator) {
        let operand = match self.pending.take() {
            None => self.display.clone(),
            Some(pending) => {
                let result = Self::compute(&pending, &self.display);
                debug!(
                    first = %pending.operand,
                    op = %pending.operator,
                    second = %self.display,
                    %result,
                    "chained operation"
                );
                self.display = result.clone();
                result
            }
        };

        self.pending = Some(PendingOperation {
            operand,
            operator: next,
        });
        self.waiting_for_second_operand = true;
    }

    /// Resolves the pending operation; no-op when nothing is pending
    pub fn equals(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let result = Self::compute(&pending, &self.display);
        debug!(
            first = %pending.operand,
            op = %pending.operator,
            second = %self.display,
            %result,
            "equals"
        );
        self.display = result;
        self.waiting_for_second_operand = true;
    }

    /// Divides the display by 100. Unlike computed results this is not rounded.
    pub fn percent(&mut self) {
        let value = parse_operand(&self.display);
        if value == 0.0 {
            return;
        }
        self.display = render(value / 100.0);
    }

    fn compute(pending: &PendingOperation, second: &str) -> String {
        let a = parse_operand(&pending.operand);
        let b = parse_operand(second);
        render_result(pending.operator.apply(a, b))
    }
}
