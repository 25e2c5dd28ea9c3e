//! Platform directory resolution with XDG environment overrides.

use crate::core::error::{Result, RotatorError};
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    }
    .ok_or(RotatorError::DirectoryUnavailable { kind: "config" })?;

    Ok(base.join("problem-rotator"))
}

pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local/share"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::data_dir(),
    }
    .ok_or(RotatorError::DirectoryUnavailable { kind: "data" })?;

    Ok(base.join("problem-rotator"))
}
