//! crates/logging-sink/src/sink/writing.rs
//! Writing of formatted lines into a sink's writer.

use super::LineSink;
use crate::line_mode::LineMode;
use std::io::{self, Write};

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes one line using the sink's current [`LineMode`].
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_line_with_mode(line, self.line_mode)
    }

    /// Writes one line using an explicit [`LineMode`] without changing the
    /// sink's configuration.
    pub fn write_line_with_mode(&mut self, line: &str, line_mode: LineMode) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Writes every line yielded by the iterator, stopping at the first error.
    pub fn write_all<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line_mode = self.line_mode;
        for line in lines {
            self.write_line_with_mode(line.as_ref(), line_mode)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
