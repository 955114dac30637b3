//! Leveled logger
//!
//! Every level method runs the same dispatch: format and emit the line, append
//! a record to today's file when asked, and on the error level optionally fail
//! the call.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::colors::Color;
use crate::config::LoggerConfig;
use crate::console::{Console, StdConsole, Stream};
use crate::error::{PersistError, RaisedError};
use crate::format::format_message;
use crate::level::Level;
use crate::options::LogOptions;
use crate::record::LogRecord;
use crate::store::{append_record, resolve_log_dir};

#[derive(Clone)]
pub struct Logger {
    config: LoggerConfig,
    console: Arc<dyn Console>,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_console(config, StdConsole)
    }

    pub fn with_console(config: LoggerConfig, console: impl Console + 'static) -> Self {
        Self {
            config,
            console: Arc::new(console),
        }
    }

    /// Merge `patch` into the current configuration. See [`LoggerConfig::merge`].
    pub fn configure(&mut self, patch: LoggerConfig) {
        self.config.merge(patch);
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// General message, white, stdout.
    pub fn log(&self, message: impl AsRef<str>, options: LogOptions) {
        self.dispatch(Level::Log, message.as_ref(), &options);
    }

    /// Informational message, blue, stdout.
    pub fn info(&self, message: impl AsRef<str>, options: LogOptions) {
        self.dispatch(Level::Info, message.as_ref(), &options);
    }

    /// Success message, green, stdout.
    pub fn success(&self, message: impl AsRef<str>, options: LogOptions) {
        self.dispatch(Level::Success, message.as_ref(), &options);
    }

    /// Warning, yellow, stderr.
    pub fn warn(&self, message: impl AsRef<str>, options: LogOptions) {
        self.dispatch(Level::Warn, message.as_ref(), &options);
    }

    /// Error, red, stderr.
    ///
    /// With [`LogOptions::raise`] set, returns `Err` displaying as
    /// `<label> <message>` once the line is emitted and any file write attempted.
    pub fn error(&self, message: impl AsRef<str>, options: LogOptions) -> Result<(), RaisedError> {
        self.log_at(Level::Error, message, options)
    }

    /// Log at a level chosen at runtime. Only [`Level::Error`] can return `Err`.
    pub fn log_at(
        &self,
        level: Level,
        message: impl AsRef<str>,
        options: LogOptions,
    ) -> Result<(), RaisedError> {
        let message = message.as_ref();
        let label = self.dispatch(level, message, &options);

        if level == Level::Error && options.raise {
            return Err(RaisedError {
                label,
                message: message.to_string(),
            });
        }
        Ok(())
    }

    /// Emit and optionally persist. Returns the resolved label.
    fn dispatch(&self, level: Level, message: &str, options: &LogOptions) -> String {
        let label = options.label().unwrap_or(level.label()).to_string();
        let color = options.color.unwrap_or(level.color());

        self.console
            .emit(level.stream(), &format_message(color, &label, message));

        if options.log_to_file {
            let record = LogRecord::capture(label.as_str(), message);
            if let Err(e) = self.persist(&record) {
                debug!(error = %e, level = %record.level, "Dropping log record");
                self.console.emit(
                    Stream::Stderr,
                    &format_message(
                        Color::FgRed,
                        Level::Error.label(),
                        &format!("Error writing log to file: {e}"),
                    ),
                );
            }
        }

        label
    }

    fn persist(&self, record: &LogRecord) -> Result<(), PersistError> {
        let dir = resolve_log_dir(&self.config)?;
        append_record(&dir, record)?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
