//! crates/logging-sink/src/format.rs
//! Rendering of a label plus format arguments into one displayable line.

use std::fmt::{self, Write as _};

const PREFIX_OPEN: char = '[';
const PREFIX_CLOSE: &str = "] ";

/// A rendered log line: `"[LABEL] message"`.
///
/// The line is stored as a single [`String`]. The label and message are
/// exposed as borrowed slices of that string.
///
/// When a `Display` impl inside the arguments reports an error the output
/// written up to that point is kept and [`is_complete`](Self::is_complete)
/// returns `false`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormattedLine {
    text: String,
    label_end: usize,
    message_start: usize,
    complete: bool,
}

impl FormattedLine {
    /// Returns the complete line, including the label prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the label between the brackets.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.text[PREFIX_OPEN.len_utf8()..self.label_end]
    }

    /// Returns the message text that follows the label prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.text[self.message_start..]
    }

    /// Returns `false` when formatting the message failed part way.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Consumes the line and returns the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for FormattedLine {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Renders `args` behind a bracketed `label` prefix.
///
/// The function has no side effects and touches no shared state.
///
/// # Examples
///
/// ```
/// use logging_sink::format_line;
///
/// let line = format_line("INFO", format_args!("listening on {}", 8080));
/// assert_eq!(line.to_string(), "[INFO] listening on 8080");
/// assert_eq!(line.label(), "INFO");
/// assert!(line.is_complete());
/// ```
#[must_use]
pub fn format_line(label: &str, args: fmt::Arguments<'_>) -> FormattedLine {
    let capacity = label.len()
        + PREFIX_OPEN.len_utf8()
        + PREFIX_CLOSE.len()
        + args.as_str().map_or(32, str::len);
    let mut text = String::with_capacity(capacity);
    text.push(PREFIX_OPEN);
    text.push_str(label);
    let label_end = text.len();
    text.push_str(PREFIX_CLOSE);
    let message_start = text.len();

    // Writing into a String only fails if a Display impl reports an error.
    let complete = text.write_fmt(args).is_ok();

    FormattedLine {
        text,
        label_end,
        message_start,
        complete,
    }
}
