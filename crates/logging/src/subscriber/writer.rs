//! crates/logging/src/subscriber/writer.rs
//! Subscriber writing lines into any `io::Write` target.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use logging_sink::{LineMode, LineSink};

use super::Subscriber;
use crate::record::Record;

/// Writes each record's line into an arbitrary [`Write`] target.
///
/// The writer sits behind its own mutex because one subscriber may be shared
/// by several channels, each dispatching under a different channel lock.
///
/// # Examples
///
/// ```
/// use logging::{ChannelRegistry, LogConfig, WriterSubscriber};
/// use std::sync::Arc;
///
/// let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
/// let capture = Arc::new(WriterSubscriber::new(Vec::new()));
/// registry.error().subscribe_shared(capture.clone());
/// registry.fatal().subscribe_shared(capture.clone());
///
/// registry.error().emit("disk failed").unwrap();
/// registry.fatal().emit("giving up").unwrap();
///
/// let text = capture.with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
/// assert_eq!(text, "[ERROR] disk failed\n[FATAL] giving up\n");
/// ```
pub struct WriterSubscriber<W> {
    sink: Mutex<LineSink<W>>,
}

impl<W> WriterSubscriber<W> {
    /// Creates a subscriber that newline-terminates each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a subscriber with an explicit [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            sink: Mutex::new(LineSink::with_line_mode(writer, line_mode)),
        }
    }

    /// Runs `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        f(sink.get_mut())
    }

    /// Consumes the subscriber and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }
}

impl<W> Subscriber for WriterSubscriber<W>
where
    W: Write + Send,
{
    fn on_record(&self, record: &Record<'_>) -> io::Result<()> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_line(record.line())?;
        sink.flush()
    }
}

impl<W> fmt::Debug for WriterSubscriber<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSubscriber")
            .field("sink", &self.sink)
            .finish()
    }
}
