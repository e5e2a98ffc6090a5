#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-sink` holds the output half of the chanlog workspace: turning a
//! channel label and a set of format arguments into one displayable line, and
//! streaming such lines into an [`std::io::Write`] target or a console handle.
//! It knows nothing about channels, levels or locking; the `logging` crate
//! layers those on top.
//!
//! # Design
//!
//! - [`format_line`] is a pure function. It renders `"[LABEL] message"` into a
//!   single [`String`] and remembers where the message text starts, so callers
//!   can hand out both the full line and the bare message without a second
//!   allocation.
//! - [`LineSink`] owns a writer and a [`LineMode`]. Each
//!   [`write_line`](LineSink::write_line) call writes one line, appending a
//!   newline unless the mode says otherwise.
//! - [`ConsoleStream`] selects stdout or stderr and locks the standard handle
//!   for the duration of one line so concurrent writers never interleave
//!   within a line.
//!
//! # Errors
//!
//! Write operations surface [`std::io::Error`] values from the underlying
//! writer unchanged. Nothing here retries or swallows failures.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{format_line, LineMode, LineSink};
//!
//! let line = format_line("WARN", format_args!("disk at {}%", 91));
//! assert_eq!(line.as_str(), "[WARN] disk at 91%");
//! assert_eq!(line.message(), "disk at 91%");
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.write_line(line.as_str()).unwrap();
//! sink.write_line("[INFO] done").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 2);
//!
//! let mut bare = LineSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! bare.write_line("[INFO] tick").unwrap();
//! assert_eq!(bare.into_inner(), b"[INFO] tick".to_vec());
//! ```

mod format;
mod line_mode;
mod sink;
mod stream;

pub use format::{FormattedLine, format_line};
pub use line_mode::LineMode;
pub use sink::LineSink;
pub use stream::{ConsoleStream, StreamParseError};
