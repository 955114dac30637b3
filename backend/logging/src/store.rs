//! Daily JSON log files.
//!
//! Each local calendar day gets one file, `DD.MM.YYYY.json`, holding a JSON
//! array of records in append order. Appends are read-modify-write without
//! locking: two writers racing on the same file can lose a record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::debug;

use crate::config::{DEFAULT_LOG_DIR, LoggerConfig};
use crate::error::PersistError;
use crate::record::LogRecord;

/// `DD.MM.YYYY.json` for the given day.
pub fn daily_file_name(date: NaiveDate) -> String {
    format!("{}.json", date.format("%d.%m.%Y"))
}

/// The configured directory, or `<cwd>/logs`.
pub fn resolve_log_dir(config: &LoggerConfig) -> Result<PathBuf, PersistError> {
    match config.log_dir() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_LOG_DIR))
            .map_err(PersistError::WorkingDir),
    }
}

/// Append `record` to today's file under `dir`, creating both if needed.
///
/// Returns the file written.
pub fn append_record(dir: &Path, record: &LogRecord) -> Result<PathBuf, PersistError> {
    std::fs::create_dir_all(dir).map_err(|source| PersistError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(daily_file_name(Local::now().date_naive()));

    let mut records = read_records(&path)?;
    let entry = serde_json::to_value(record).map_err(|source| PersistError::Serialize {
        path: path.clone(),
        source,
    })?;
    records.push(entry);

    let json = serde_json::to_string_pretty(&records).map_err(|source| {
        PersistError::Serialize {
            path: path.clone(),
            source,
        }
    })?;
    std::fs::write(&path, json).map_err(|source| PersistError::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), level = %record.level, count = records.len(), "Appended log record");
    Ok(path)
}

/// Existing entries of a day file; a missing file is an empty day.
///
/// Entries stay generic JSON (insertion-ordered) so foreign fields already on
/// disk survive the rewrite with their key order.
fn read_records(path: &Path) -> Result<Vec<Value>, PersistError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(PersistError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&raw).map_err(|source| PersistError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
