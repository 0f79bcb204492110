//! Terminal mode switching with guaranteed restore.

use crossterm::cursor::Show;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io;
use tracing::warn;

/// Leave the alternate screen, drop raw mode and show the cursor.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    Ok(())
}

/// Runs a restore action exactly once: on [`RestoreGuard::restore`], or on
/// drop if setup bailed out early with `?`.
pub struct RestoreGuard<F: FnOnce() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnOnce() -> io::Result<()>> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restore now and report any error.
    pub fn restore(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnOnce() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            if let Err(e) = restore() {
                warn!(error = %e, "failed to restore terminal");
            }
        }
    }
}
