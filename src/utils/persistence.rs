//! JSON helpers for files under ~/.tictactoe/.
//!
//! Only configuration lives here; game outcomes are never written to disk.

use crate::core::constants::DATA_DIR_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.tictactoe/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.tictactoe/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load JSON from `path`. Parse failures map to `InvalidData`.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<T> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Save a value as pretty-printed JSON to `path`.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tictactoe_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("test.json").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".tictactoe/test.json"));
    }

    #[test]
    fn test_load_json_reports_parse_error() {
        let path = scratch_path("broken.json");
        fs::write(&path, "[1, 2").unwrap();
        let err = load_json::<Vec<u32>>(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_json_missing_is_not_found() {
        let err = load_json::<Vec<u32>>(&scratch_path("absent.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("saved.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json(&path).expect("load should succeed");
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }
}
