//! Terminal UI module
//!
//! Terminal setup/teardown and the Ratatui rendering surface.

pub mod layout;
pub mod theme;
pub mod views;

pub use theme::{theme, Theme};

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{self, stdout};

/// Terminal UI wrapper
///
/// Handles terminal setup, teardown, and provides the rendering surface.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Whether bracketed paste mode is enabled
    bracketed_paste_enabled: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            bracketed_paste_enabled: false,
        })
    }

    /// Enter TUI mode (raw mode + alternate screen)
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        // Bracketed paste lets multi-line pastes arrive as one event
        if stdout().execute(EnableBracketedPaste).is_ok() {
            self.bracketed_paste_enabled = true;
        }

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Exit TUI mode (restore terminal)
    pub fn exit(&mut self) -> Result<()> {
        tracing::debug!("Restoring terminal");

        if self.bracketed_paste_enabled {
            if let Err(e) = stdout().execute(DisableBracketedPaste) {
                tracing::warn!("failed to disable bracketed paste: {}", e);
            }
            self.bracketed_paste_enabled = false;
        }

        self.terminal.show_cursor()?;
        stdout().execute(LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    /// Get terminal size
    pub fn size(&self) -> Result<Rect> {
        Ok(self.terminal.size()?)
    }

    /// Draw a frame
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Tracing may already be torn down here, so errors go to stderr
        if self.bracketed_paste_enabled {
            if let Err(e) = stdout().execute(DisableBracketedPaste) {
                eprintln!("TUI teardown: failed to disable bracketed paste: {}", e);
            }
        }
        if let Err(e) = self.terminal.show_cursor() {
            eprintln!("TUI teardown: failed to show cursor: {}", e);
        }
        if let Err(e) = stdout().execute(LeaveAlternateScreen) {
            eprintln!("TUI teardown: failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            eprintln!("TUI teardown: failed to disable raw mode: {}", e);
        }
    }
}
