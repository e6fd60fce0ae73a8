//! Terminal management for interactive UI
//!
//! Raw mode and the alternate screen are entered on setup and always left
//! again on cleanup, including after an error in the event loop.

use crate::error::AppError;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{Stdout, stdout};

/// Terminal manager responsible for setup and cleanup operations
#[derive(Debug, Default)]
pub struct TerminalManager;

impl TerminalManager {
    pub fn new() -> Self {
        Self
    }

    /// Setup terminal for interactive mode
    /// Returns a handle to stdout that can be used for rendering
    pub fn setup_terminal(&self) -> Result<Stdout, AppError> {
        let mut stdout = stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
        Ok(stdout)
    }

    /// Restores the terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: Stdout) -> Result<(), AppError> {
        disable_raw_mode()?;
        execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }
}
