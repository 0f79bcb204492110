//! Utility modules: configuration, logging, JSON files, terminal setup.

pub mod config;
pub mod logging;
pub mod persistence;
pub mod terminal;

pub use config::Config;
pub use logging::{init_logging, init_logging_to};
pub use terminal::{restore_terminal, RestoreGuard};
