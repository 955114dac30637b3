//! Console sinks.
//!
//! A [`Console`] receives each formatted line together with the stream its
//! level routes to. [`StdConsole`] writes to the process streams;
//! [`CaptureConsole`] keeps lines in memory for assertions.

use std::sync::{Arc, Mutex};

use crate::colors::strip_ansi;

/// Which of the two console streams a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Destination for formatted log lines.
pub trait Console: Send + Sync {
    fn emit(&self, stream: Stream, line: &str);
}

/// Writes to the process stdout / stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn emit(&self, stream: Stream, line: &str) {
        match stream {
            Stream::Stdout => println!("{line}"),
            Stream::Stderr => eprintln!("{line}"),
        }
    }
}

/// In-memory console. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct CaptureConsole {
    lines: Arc<Mutex<Vec<(Stream, String)>>>,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured lines, escape sequences included.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Captured lines with ANSI sequences stripped.
    pub fn plain_lines(&self) -> Vec<(Stream, String)> {
        self.lines()
            .into_iter()
            .map(|(stream, line)| (stream, strip_ansi(&line)))
            .collect()
    }

    /// Stripped lines written to one stream.
    pub fn plain(&self, stream: Stream) -> Vec<String> {
        self.plain_lines()
            .into_iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Console for CaptureConsole {
    fn emit(&self, stream: Stream, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((stream, line.to_string()));
        }
    }
}
