//! User configuration stored in ~/.tictactoe/config.json.

use super::persistence::{data_path, load_json, save_json};
use crate::core::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_FILTER};
use crate::game::Mode;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mode selected at startup ("single" or "multi")
    pub default_mode: Mode,
    /// tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn path() -> io::Result<PathBuf> {
        data_path(CONFIG_FILE_NAME)
    }

    /// Load from the default location.
    pub fn try_load() -> io::Result<Self> {
        Self::try_load_from(&Self::path()?)
    }

    /// A missing file gives defaults. Unparseable JSON is `InvalidData`.
    pub fn try_load_from(path: &Path) -> io::Result<Self> {
        match load_json(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tictactoe_cfg_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_mode, Mode::TwoPlayer);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_path("partial.json");
        fs::write(&path, r#"{ "default_mode": "single" }"#).unwrap();
        let config = Config::try_load_from(&path).unwrap();
        assert_eq!(config.default_mode, Mode::SinglePlayer);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::try_load_from(&scratch_path("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_mode_is_invalid_data() {
        let path = scratch_path("bad_mode.json");
        fs::write(&path, r#"{ "default_mode": "solo" }"#).unwrap();
        let err = Config::try_load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_broken_json_is_invalid_data() {
        let path = scratch_path("broken.json");
        fs::write(&path, "{ \"log_filter\": ").unwrap();
        let err = Config::try_load_from(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved.json");
        let config = Config {
            default_mode: Mode::SinglePlayer,
            log_filter: "tictactoe=debug".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::try_load_from(&path).unwrap(), config);
        fs::remove_file(path).ok();
    }
}
