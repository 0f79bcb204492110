//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "tictactoe 0.1.0 (2024-05-01, abc1234)"
pub fn version_string() -> String {
    format!(
        "tictactoe {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
