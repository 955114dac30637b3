use std::backtrace::Backtrace;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One persisted entry of a daily log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Resolved label, e.g. `INFO` or a custom name.
    pub level: String,
    pub message: String,
    /// UTC, millisecond precision, `Z` suffix.
    pub timestamp: String,
    /// Best-effort backtrace of the logging call. Diagnostic only.
    pub trace: String,
}

impl LogRecord {
    /// Stamps the record with the current time and call stack.
    pub fn capture(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            trace: Backtrace::force_capture().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn timestamp_is_iso_8601_utc() {
        let record = LogRecord::capture("INFO", "hello");
        assert!(record.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
    }

    #[test]
    fn serializes_the_four_fields() {
        let record = LogRecord {
            level: "WARN".into(),
            message: "low disk".into(),
            timestamp: "2026-10-19T08:00:00.000Z".into(),
            trace: String::new(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "level": "WARN",
                "message": "low disk",
                "timestamp": "2026-10-19T08:00:00.000Z",
                "trace": ""
            })
        );
    }
}
