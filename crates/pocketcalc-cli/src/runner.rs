//! Interactive and scripted front ends

use crate::config::CliConfig;
use crate::error::CliResult;
use crossterm::event::{self, Event, KeyEventKind};
use pocketcalc::driver::{CalculatorDriver, EngineDriver};
use pocketcalc::tui::{install_panic_hook, keypad_area, render, CalculatorApp, TerminalSession};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::fmt;
use std::io;
use tracing::{debug, info};

/// Outcome of a `--keys` replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    /// Pending expression line, empty when nothing is pending
    pub pending: String,
    /// Final display text
    pub display: String,
}

impl fmt::Display for ScriptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.pending.is_empty() {
            writeln!(f, "{}", self.pending)?;
        }
        writeln!(f, "{}", self.display)
    }
}

/// Replay a key script against the engine without touching the terminal
pub fn run_script(keys: &str) -> CliResult<ScriptReport> {
    let mut driver = EngineDriver::new();
    driver.type_keys(keys)?;
    let report = ScriptReport {
        pending: driver.pending_expression(),
        display: driver.display(),
    };
    info!(keys, display = %report.display, "key script replayed");
    Ok(report)
}

/// Run the calculator in the terminal until the user quits
pub fn run_interactive(config: &CliConfig) -> CliResult<()> {
    install_panic_hook(config.mouse_capture);
    let mut session = TerminalSession::enter(config.mouse_capture)?;
    let mut app = CalculatorApp::new();

    info!(mouse_capture = config.mouse_capture, "calculator started");
    event_loop(session.terminal_mut(), &mut app, event::read)?;
    info!(display = app.display(), "calculator closed");
    Ok(())
}

/// Draw, wait for an event, apply it; repeat until the app asks to quit
pub fn event_loop<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
    mut next_event: F,
) -> CliResult<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;
        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        handle_event(app, next_event()?, screen);
    }
    Ok(())
}

/// Route one terminal event to the app
pub fn handle_event(app: &mut CalculatorApp, event: Event, screen: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
        Event::Mouse(mouse) => app.handle_mouse(mouse, keypad_area(screen)),
        Event::Resize(width, height) => debug!(width, height, "terminal resized"),
        _ => {}
    }
}
