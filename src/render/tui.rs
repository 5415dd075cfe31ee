use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

/// The terminal, switched to raw mode on the alternate screen.
///
/// Dropping it puts the terminal back the way it was, also when the game
/// loop bails out with an error.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        let backend = CrosstermBackend::new(stderr());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut tui = Self { terminal };

        execute!(tui.terminal.backend_mut(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        tui.terminal.hide_cursor().context("Failed to hide cursor")?;
        tui.terminal.clear().context("Failed to clear terminal")?;

        Ok(tui)
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render).context("Failed to draw frame")?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::error!("failed to restore terminal: {err:#}");
        }
    }
}
