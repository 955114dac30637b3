use std::path::PathBuf;

use thiserror::Error;

/// Failure while appending a record to the day's log file.
///
/// These never escape a `Logger` call; dispatch reports them on the error
/// stream and drops the record.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot resolve working directory for default log path: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse log file {} as a JSON array: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize log records for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure requested by the caller through [`LogOptions::raise`](crate::LogOptions::raise)
/// on an error-level call.
///
/// Displays as `<label> <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} {message}")]
pub struct RaisedError {
    pub label: String,
    pub message: String,
}

/// Failure loading a [`LoggerConfig`](crate::LoggerConfig) from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read logger config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse logger config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Unknown name given where a [`Color`](crate::Color) or [`Level`](crate::Level) was expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} \"{value}\"")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}
