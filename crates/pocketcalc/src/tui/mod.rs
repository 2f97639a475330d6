//! TUI frontend for the calculator

mod app;
mod input;
mod keypad;
mod session;
mod theme;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonKind, Keypad, KeypadButton, KeypadWidget};
pub use session::{install_panic_hook, restore_terminal, SessionTerminal, TerminalSession};
pub use ui::{card_area, fit_display, keypad_area, render, CalculatorUI};
