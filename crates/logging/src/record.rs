//! crates/logging/src/record.rs
//! The borrowed view of one accepted message.

use logging_sink::FormattedLine;

use crate::level::Level;

/// One accepted message, as handed to every subscriber of a channel.
///
/// The record borrows the line rendered once by the emitting channel, so
/// subscribers that only inspect or copy text never trigger a second
/// formatting pass.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    line: &'a FormattedLine,
}

impl<'a> Record<'a> {
    pub(crate) const fn new(level: Level, line: &'a FormattedLine) -> Self {
        Self { level, line }
    }

    /// Returns the level of the emitting channel.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the emitting channel's label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.line.label()
    }

    /// Returns the message text without the label prefix.
    #[must_use]
    pub fn message(&self) -> &'a str {
        self.line.message()
    }

    /// Returns the full displayable line, label prefix included.
    #[must_use]
    pub fn line(&self) -> &'a str {
        self.line.as_str()
    }

    /// Returns `false` when a `Display` impl failed while the message was
    /// being rendered; [`message`](Self::message) then holds the partial
    /// output.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.line.is_complete()
    }
}
