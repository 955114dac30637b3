//! Logger configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Environment variable consulted by [`LoggerConfig::from_env`].
pub const LOG_PATH_ENV: &str = "DAYLOG_LOG_PATH";

/// Directory name under the working directory used when no path is set.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Settings a [`Logger`](crate::Logger) reads on every persisted call.
///
/// Nothing is validated; an unusable path only shows up when a write fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Directory holding the daily `DD.MM.YYYY.json` files.
    /// Unset or empty means `<cwd>/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

impl LoggerConfig {
    pub fn with_log_path(path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: Some(path.into()),
        }
    }

    /// Shallow merge: fields set in `patch` win, unset fields keep their value.
    pub fn merge(&mut self, patch: LoggerConfig) {
        if let Some(path) = patch.log_path {
            self.log_path = Some(path);
        }
    }

    /// The configured directory, if one is set and non-empty.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Read `DAYLOG_LOG_PATH` from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(&std::env::vars().collect())
    }

    /// Same as [`from_env`](Self::from_env) over a provided map.
    pub fn from_env_with(env: &HashMap<String, String>) -> Self {
        Self {
            log_path: env
                .get(LOG_PATH_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Load from a YAML file. JSON files parse too.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: LoggerConfig =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "Loaded logger config");
        Ok(config)
    }
}
