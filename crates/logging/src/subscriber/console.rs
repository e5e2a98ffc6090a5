//! crates/logging/src/subscriber/console.rs
//! Default subscriber writing each line to stdout or stderr.

use std::io;

use logging_sink::{ConsoleStream, LineMode};

use super::Subscriber;
use crate::record::Record;

/// Writes each record's line to stdout or stderr.
///
/// This is the subscriber every channel receives at construction unless the
/// registry's [`LogConfig`](crate::LogConfig) disables the console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsoleSubscriber {
    stream: ConsoleStream,
    line_mode: LineMode,
}

impl ConsoleSubscriber {
    /// Creates a subscriber writing newline-terminated lines to `stream`.
    #[must_use]
    pub const fn new(stream: ConsoleStream) -> Self {
        Self::with_line_mode(stream, LineMode::WithNewline)
    }

    /// Creates a subscriber with an explicit [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(stream: ConsoleStream, line_mode: LineMode) -> Self {
        Self { stream, line_mode }
    }

    /// Returns the target stream.
    #[must_use]
    pub const fn stream(&self) -> ConsoleStream {
        self.stream
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }
}

impl Subscriber for ConsoleSubscriber {
    fn on_record(&self, record: &Record<'_>) -> io::Result<()> {
        self.stream.write_line(record.line(), self.line_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use logging_sink::format_line;

    #[test]
    fn defaults_to_stdout_with_newline() {
        let console = ConsoleSubscriber::default();
        assert_eq!(console.stream(), ConsoleStream::Stdout);
        assert_eq!(console.line_mode(), LineMode::WithNewline);
    }

    #[test]
    fn writes_to_stderr() {
        let console = ConsoleSubscriber::new(ConsoleStream::Stderr);
        let line = format_line("DEBUG", format_args!("console subscriber test"));
        console
            .on_record(&Record::new(Level::Debug, &line))
            .expect("stderr write succeeds");
    }
}
