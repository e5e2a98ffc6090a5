//! crates/logging-sink/src/sink/mod.rs
//! Line sinks that terminate rendered lines per `LineMode`.

use std::fmt;

use crate::line_mode::LineMode;

/// Line-oriented sink that writes rendered log lines into an
/// [`std::io::Write`] target.
///
/// The sink owns its writer and the [`LineMode`] that decides whether each
/// line ends with a newline. It holds no buffers of its own; buffering, if
/// any, belongs to the writer.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineMode, LineSink};
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("[WARN] vanished")?;
/// sink.write_line("[ERROR] partial")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[WARN] vanished\n[ERROR] partial\n");
///
/// let mut sink = LineSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write_line("[INFO] ready")?;
/// assert_eq!(sink.into_inner(), b"[INFO] ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct LineSink<W> {
    writer: W,
    line_mode: LineMode,
}

mod writing;

impl<W> LineSink<W> {
    /// Creates a sink that appends a newline after each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
