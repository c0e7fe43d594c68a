use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

/// Raw-mode alternate screen owned for the lifetime of a game.
///
/// Drawing goes to stderr so stdout stays free for the final score. The
/// terminal is put back either by `restore` or on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    active: bool,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        if let Err(err) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stderr)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err).context("Failed to create terminal");
            }
        };

        // From here on Drop puts the terminal back
        let mut session = Self {
            terminal,
            active: true,
        };
        session
            .terminal
            .hide_cursor()
            .context("Failed to hide cursor")?;
        session.terminal.clear().context("Failed to clear terminal")?;

        Ok(session)
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render)
            .context("Failed to draw frame")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal
            .show_cursor()
            .context("Failed to show cursor")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
