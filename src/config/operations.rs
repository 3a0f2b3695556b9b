//! Config loading, validation, and lookup.

use super::model::Config;
use crate::error::{MazeError, Result};
use std::path::Path;
use tracing::debug;

/// File looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "mazewalk.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MazeError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MazeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MazeError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MazeError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `budgets` must not be empty
    /// - `max_line_length` must be positive
    /// - `backtrack_capacity`, when set, must be positive
    pub fn validate(&self) -> Result<()> {
        if self.budgets.is_empty() {
            return Err(MazeError::ConfigError(
                "config validation failed: budgets must list at least one move budget".to_string(),
            ));
        }

        if self.max_line_length == 0 {
            return Err(MazeError::ConfigError(
                "config validation failed: max_line_length must be greater than 0".to_string(),
            ));
        }

        if self.backtrack_capacity == Some(0) {
            return Err(MazeError::ConfigError(
                "config validation failed: backtrack_capacity must be greater than 0 (omit it for no limit)"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Find the config for this run.
///
/// An explicit path must exist. Otherwise `mazewalk.yaml` in the current
/// directory is used when present, and defaults when not.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return Config::load(path);
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if local.is_file() {
        debug!(path = %local.display(), "loading config from current directory");
        Config::load(local)
    } else {
        Ok(Config::default())
    }
}
