//! Configuration loading
//!
//! Reads `~/.config/wayfinder/config.toml` unless a path is given on the
//! command line. Every key is optional.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, LookupConfig};

use crate::error::WayfinderError;

const CONFIG_DIR: &str = "wayfinder";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// An explicit path must exist. The default path may be absent, in which case
/// defaults are used. Parse errors are reported in both cases.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, WayfinderError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, WayfinderError> {
    let contents = fs::read_to_string(path).map_err(|source| WayfinderError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config_toml(&contents).map_err(|message| WayfinderError::InvalidConfig {
        path: path.to_path_buf(),
        message,
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
