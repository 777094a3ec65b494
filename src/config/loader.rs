use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::CharsearchError;

const CONFIG_DIR: &str = "charsearch";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the user config
///
/// A broken file never stops the program: defaults are used and the warning
/// is shown to the user as a notification.
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from an explicit path, or the default location
///
/// A missing file at the default location is not an error.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    match load_config_from_path(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, CharsearchError> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| CharsearchError::Config {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
