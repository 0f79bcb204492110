// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;

// Computer opponent
pub const COMPUTER_MOVE_DELAY_MS: u64 = 500;

// Files under ~/.tictactoe/
pub const DATA_DIR_NAME: &str = ".tictactoe";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "tictactoe.log";

// Default tracing filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
