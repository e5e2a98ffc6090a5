//! crates/logging-sink/src/stream.rs
//! Console stream selection for the default channel subscriber.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::line_mode::LineMode;

/// Standard stream a console subscriber writes to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConsoleStream {
    /// The process's standard output.
    #[default]
    Stdout,
    /// The process's standard error.
    Stderr,
}

impl ConsoleStream {
    /// Returns the lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }

    /// Writes `line` to the stream while holding the standard handle's lock,
    /// so lines from different threads never interleave.
    ///
    /// The line and its optional newline are written in one call, then the
    /// handle is flushed.
    pub fn write_line(self, line: &str, line_mode: LineMode) -> io::Result<()> {
        match self {
            Self::Stdout => write_locked(&mut io::stdout().lock(), line, line_mode),
            Self::Stderr => write_locked(&mut io::stderr().lock(), line, line_mode),
        }
    }
}

fn write_locked<W: Write>(handle: &mut W, line: &str, line_mode: LineMode) -> io::Result<()> {
    if line_mode.append_newline() {
        writeln!(handle, "{line}")?;
    } else {
        handle.write_all(line.as_bytes())?;
    }
    handle.flush()
}

impl fmt::Display for ConsoleStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`ConsoleStream`] from an unrecognised name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised console stream {input:?}; expected stdout or stderr")]
pub struct StreamParseError {
    input: String,
}

impl StreamParseError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ConsoleStream {
    type Err = StreamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("stdout") {
            Ok(Self::Stdout)
        } else if trimmed.eq_ignore_ascii_case("stderr") {
            Ok(Self::Stderr)
        } else {
            Err(StreamParseError {
                input: s.to_owned(),
            })
        }
    }
}
