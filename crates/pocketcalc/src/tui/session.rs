//! Terminal session guard
//!
//! While a [`TerminalSession`] is alive the terminal is in raw mode on the
//! alternate screen, delivering key (and optionally mouse) events to the
//! calculator. Dropping the session hands the terminal back, so every exit
//! path releases it, including `?` early returns and unwinding panics.

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

/// Terminal type driven by the session
pub type SessionTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Scoped ownership of the terminal's input listener
#[derive(Debug)]
pub struct TerminalSession {
    terminal: SessionTerminal,
    mouse_capture: bool,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen, optionally capturing the mouse
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;

        let setup = || -> io::Result<SessionTerminal> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            if mouse_capture {
                execute!(stdout, EnableMouseCapture)?;
            }
            Terminal::new(CrosstermBackend::new(stdout))
        };

        match setup() {
            Ok(terminal) => {
                debug!(mouse_capture, "terminal session entered");
                Ok(Self {
                    terminal,
                    mouse_capture,
                })
            }
            Err(err) => {
                // Undo whatever part of the setup succeeded
                let _ = restore_terminal(mouse_capture);
                Err(err)
            }
        }
    }

    /// Whether mouse events are being delivered
    #[must_use]
    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture
    }

    /// Returns the terminal to draw on
    pub fn terminal_mut(&mut self) -> &mut SessionTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        match restore_terminal(self.mouse_capture) {
            Ok(()) => debug!("terminal session released"),
            Err(err) => warn!(%err, "failed to restore terminal"),
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor
pub fn restore_terminal(mouse_capture: bool) -> io::Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse_capture {
        execute!(stdout, DisableMouseCapture)?;
    }
    execute!(stdout, LeaveAlternateScreen, Show)?;
    raw
}

/// Installs a panic hook that restores the terminal before the panic message
/// is printed, so the message is readable.
pub fn install_panic_hook(mouse_capture: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(mouse_capture);
        previous(info);
    }));
}
