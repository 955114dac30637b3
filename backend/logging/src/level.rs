//! Severity levels and their fixed presentation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::console::Stream;
use crate::error::ParseError;

/// Severity of a log call. Every level always emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Log,
    Info,
    Success,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Log,
        Level::Info,
        Level::Success,
        Level::Warn,
        Level::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Log => "log",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Default bracketed label: the uppercased level name.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Level::Log => Color::FgWhite,
            Level::Info => Color::FgBlue,
            Level::Success => Color::FgGreen,
            Level::Warn => Color::FgYellow,
            Level::Error => Color::FgRed,
        }
    }

    /// Warnings and errors go to stderr, everything else to stdout.
    pub const fn stream(self) -> Stream {
        match self {
            Level::Log | Level::Info | Level::Success => Stream::Stdout,
            Level::Warn | Level::Error => Stream::Stderr,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "warning" => Ok(Level::Warn),
            "plain" => Ok(Level::Log),
            _ => Level::ALL
                .into_iter()
                .find(|l| l.as_str() == wanted)
                .ok_or_else(|| ParseError {
                    kind: "level",
                    value: s.to_string(),
                }),
        }
    }
}
