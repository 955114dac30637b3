//! ANSI terminal styles.
//!
//! Escape sequences are always emitted; there is no terminal capability check.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

static SGR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

/// A terminal styling escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Reset,
    Bright,
    Dim,
    Underscore,
    Blink,
    Reverse,
    Hidden,

    FgBlack,
    FgRed,
    FgGreen,
    FgYellow,
    FgBlue,
    FgMagenta,
    FgCyan,
    FgWhite,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
}

impl Color {
    pub const ALL: [Color; 23] = [
        Color::Reset,
        Color::Bright,
        Color::Dim,
        Color::Underscore,
        Color::Blink,
        Color::Reverse,
        Color::Hidden,
        Color::FgBlack,
        Color::FgRed,
        Color::FgGreen,
        Color::FgYellow,
        Color::FgBlue,
        Color::FgMagenta,
        Color::FgCyan,
        Color::FgWhite,
        Color::BgBlack,
        Color::BgRed,
        Color::BgGreen,
        Color::BgYellow,
        Color::BgBlue,
        Color::BgMagenta,
        Color::BgCyan,
        Color::BgWhite,
    ];

    /// The escape sequence, e.g. `"\x1b[31m"` for [`Color::FgRed`].
    pub const fn ansi(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Bright => "\x1b[1m",
            Color::Dim => "\x1b[2m",
            Color::Underscore => "\x1b[4m",
            Color::Blink => "\x1b[5m",
            Color::Reverse => "\x1b[7m",
            Color::Hidden => "\x1b[8m",

            Color::FgBlack => "\x1b[30m",
            Color::FgRed => "\x1b[31m",
            Color::FgGreen => "\x1b[32m",
            Color::FgYellow => "\x1b[33m",
            Color::FgBlue => "\x1b[34m",
            Color::FgMagenta => "\x1b[35m",
            Color::FgCyan => "\x1b[36m",
            Color::FgWhite => "\x1b[37m",

            Color::BgBlack => "\x1b[40m",
            Color::BgRed => "\x1b[41m",
            Color::BgGreen => "\x1b[42m",
            Color::BgYellow => "\x1b[43m",
            Color::BgBlue => "\x1b[44m",
            Color::BgMagenta => "\x1b[45m",
            Color::BgCyan => "\x1b[46m",
            Color::BgWhite => "\x1b[47m",
        }
    }

    /// Kebab-case name used by config files and the CLI (`fg-magenta`).
    pub const fn name(self) -> &'static str {
        match self {
            Color::Reset => "reset",
            Color::Bright => "bright",
            Color::Dim => "dim",
            Color::Underscore => "underscore",
            Color::Blink => "blink",
            Color::Reverse => "reverse",
            Color::Hidden => "hidden",

            Color::FgBlack => "fg-black",
            Color::FgRed => "fg-red",
            Color::FgGreen => "fg-green",
            Color::FgYellow => "fg-yellow",
            Color::FgBlue => "fg-blue",
            Color::FgMagenta => "fg-magenta",
            Color::FgCyan => "fg-cyan",
            Color::FgWhite => "fg-white",

            Color::BgBlack => "bg-black",
            Color::BgRed => "bg-red",
            Color::BgGreen => "bg-green",
            Color::BgYellow => "bg-yellow",
            Color::BgBlue => "bg-blue",
            Color::BgMagenta => "bg-magenta",
            Color::BgCyan => "bg-cyan",
            Color::BgWhite => "bg-white",
        }
    }
}

/// Writes the raw escape sequence.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ansi())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Color::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ParseError {
                kind: "color",
                value: s.to_string(),
            })
    }
}

/// Removes ANSI SGR escape sequences, leaving the visible text.
pub fn strip_ansi(input: &str) -> String {
    SGR_RE.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ansi() {
        let colored = format!("{}hello{} world", Color::FgGreen, Color::Reset);
        assert_eq!(strip_ansi(&colored), "hello world");
    }

    #[test]
    fn codes_match_sgr_table() {
        assert_eq!(Color::Reset.ansi(), "\x1b[0m");
        assert_eq!(Color::Hidden.ansi(), "\x1b[8m");
        assert_eq!(Color::FgWhite.ansi(), "\x1b[37m");
        assert_eq!(Color::BgBlack.ansi(), "\x1b[40m");
    }

    #[test]
    fn parses_names_leniently() {
        assert_eq!("fg-magenta".parse::<Color>().unwrap(), Color::FgMagenta);
        assert_eq!("BG_RED".parse::<Color>().unwrap(), Color::BgRed);
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case_names() {
        let json = serde_json::to_string(&Color::FgCyan).unwrap();
        assert_eq!(json, "\"fg-cyan\"");
    }
}
