//! Leveled console logging with daily JSON log files.
//!
//! Each call prints a `[LABEL] message` line with an ANSI-colored label and can
//! append a structured record to `<log dir>/DD.MM.YYYY.json`.

pub mod colors;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod options;
pub mod record;
pub mod store;

pub use colors::{Color, strip_ansi};
pub use config::LoggerConfig;
pub use console::{CaptureConsole, Console, StdConsole, Stream};
pub use error::{ConfigError, ParseError, PersistError, RaisedError};
pub use format::format_message;
pub use level::Level;
pub use logger::Logger;
pub use options::LogOptions;
pub use record::LogRecord;
