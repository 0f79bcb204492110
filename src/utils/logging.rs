//! File-backed tracing setup.
//!
//! Logs go to ~/.tictactoe/tictactoe.log so they never draw over the TUI.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE_NAME;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) -> io::Result<()> {
    init_logging_to(&data_path(LOG_FILE_NAME)?, default_filter)
}

/// Same as [`init_logging`] with an explicit log file, truncated on start.
///
/// A subscriber installed earlier (e.g. by a test harness) is left alone.
pub fn init_logging_to(path: &Path, default_filter: &str) -> io::Result<()> {
    let log_file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
