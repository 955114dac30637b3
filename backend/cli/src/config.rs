use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use daylog::LoggerConfig;
use tracing::debug;

/// Layer the logger settings: environment, then config file, then `--log-path`.
pub fn resolve(
    env: &HashMap<String, String>,
    config_file: Option<&Path>,
    log_path: Option<PathBuf>,
) -> Result<LoggerConfig> {
    let mut config = LoggerConfig::from_env_with(env);

    if let Some(file) = config_file {
        let from_file = LoggerConfig::load(file)
            .with_context(|| format!("Failed to load logger config: {}", file.display()))?;
        config.merge(from_file);
    }

    if let Some(dir) = log_path {
        config.merge(LoggerConfig::with_log_path(dir));
    }

    debug!(config = ?config, "Resolved logger config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylog::config::LOG_PATH_ENV;

    fn env_with_path(path: &str) -> HashMap<String, String> {
        HashMap::from([(LOG_PATH_ENV.to_string(), path.to_string())])
    }

    #[test]
    fn flag_beats_env() {
        let cfg = resolve(&env_with_path("/from/env"), None, Some("/from/flag".into())).unwrap();
        assert_eq!(cfg.log_dir(), Some(Path::new("/from/flag")));
    }

    #[test]
    fn file_beats_env_and_flag_beats_file() {
        let dir = std::env::temp_dir().join(format!("daylog-cli-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("daylog.yaml");
        std::fs::write(&file, "logPath: /from/file\n").unwrap();

        let cfg = resolve(&env_with_path("/from/env"), Some(&file), None).unwrap();
        assert_eq!(cfg.log_dir(), Some(Path::new("/from/file")));

        let cfg = resolve(&env_with_path("/from/env"), Some(&file), Some("/from/flag".into())).unwrap();
        assert_eq!(cfg.log_dir(), Some(Path::new("/from/flag")));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_without_path_keeps_env_value() {
        let dir = std::env::temp_dir().join(format!("daylog-cli-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("daylog.json");
        std::fs::write(&file, "{}").unwrap();

        let cfg = resolve(&env_with_path("/from/env"), Some(&file), None).unwrap();
        assert_eq!(cfg.log_dir(), Some(Path::new("/from/env")));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn nothing_set_means_default() {
        let cfg = resolve(&HashMap::new(), None, None).unwrap();
        assert_eq!(cfg, LoggerConfig::default());
    }
}
