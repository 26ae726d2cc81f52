//! Configuration file discovery, loading, and validation.

use crate::error::ConfigError;
use crate::types::SiftConfig;
use std::path::{Path, PathBuf};

/// The file name looked up by [`find_config_file`].
pub const CONFIG_FILE_NAME: &str = "errsift.toml";

/// Walks up from `start` looking for the nearest `errsift.toml`.
///
/// Returns the path of the file, or `None` if no ancestor contains one.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads and validates the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<SiftConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates an `errsift.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<SiftConfig, ConfigError> {
    let config: SiftConfig =
        toml::from_str(content).map_err(|e| ConfigError::Syntax(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that language tags are usable as single whitespace-free words.
fn validate_config(config: &SiftConfig) -> Result<(), ConfigError> {
    if let Some(ref lang) = config.extract.default_language {
        if !is_tag(lang) {
            return Err(ConfigError::InvalidSetting(format!(
                "default_language '{lang}' must be a non-empty tag without whitespace"
            )));
        }
    }
    for (alias, target) in &config.extract.aliases {
        if !is_tag(alias) {
            return Err(ConfigError::InvalidSetting(format!(
                "alias '{alias}' must be a non-empty tag without whitespace"
            )));
        }
        if !is_tag(target) {
            return Err(ConfigError::InvalidSetting(format!(
                "alias '{alias}' has an invalid target '{target}'"
            )));
        }
    }
    Ok(())
}

fn is_tag(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}
