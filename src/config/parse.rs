//! Configuration file discovery and parsing

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, VulnDbError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["vuln_db.yml", "vuln_db.yaml"];

/// Find a configuration file starting from a directory and walking up
pub fn find_config_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Find a configuration file in the per-user config directory
pub fn find_user_config_file() -> Option<PathBuf> {
    let dirs = super::project_dirs()?;
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dirs.config_dir().join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, VulnDbError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut config = parse_config(&contents)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, VulnDbError> {
    // An empty document is null rather than a mapping
    let config: Option<Config> = serde_yaml::from_str(yaml)?;
    Ok(config.unwrap_or_default())
}

/// Load the configuration
///
/// An explicit path must exist. Otherwise the current directory and its
/// parents are searched, then the user config directory. No file at all
/// yields the default configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, VulnDbError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        return parse_config_file(path);
    }

    let discovered = current_dir()
        .ok()
        .and_then(find_config_file_from)
        .or_else(find_user_config_file);

    match discovered {
        Some(path) => parse_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn current_dir() -> ConfigResult<PathBuf> {
    env::current_dir()
        .map_err(|e| ConfigError::Invalid(format!("Failed to get current directory: {}", e)))
}
