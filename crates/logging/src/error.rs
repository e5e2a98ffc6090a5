//! crates/logging/src/error.rs
//! Error types surfaced by channels, configuration and global setup.

use std::io;

use logging_sink::StreamParseError;
use thiserror::Error;

use crate::level::{Level, LevelParseError};
use crate::subscriber::SubscriberId;

/// A subscriber failed while a channel was dispatching a message.
///
/// The channel stops at the failing subscriber and returns this error to the
/// caller of `emit`; subscribers registered after it do not see the message.
#[derive(Debug, Error)]
#[error("{level} subscriber {subscriber} failed")]
pub struct EmitError {
    level: Level,
    subscriber: SubscriberId,
    #[source]
    source: io::Error,
}

impl EmitError {
    pub(crate) const fn new(level: Level, subscriber: SubscriberId, source: io::Error) -> Self {
        Self {
            level,
            subscriber,
            source,
        }
    }

    /// Returns the level of the channel that was dispatching.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the handle of the subscriber that failed.
    #[must_use]
    pub const fn subscriber(&self) -> SubscriberId {
        self.subscriber
    }

    /// Returns the underlying I/O error kind.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Consumes the error and returns the subscriber's I/O error.
    #[must_use]
    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

/// Errors raised while configuring logging.
#[derive(Debug, Error)]
pub enum LogError {
    /// [`init`](crate::init) was called after the global registry already
    /// existed.
    #[error("the global channel registry is already initialized")]
    AlreadyInitialized,
    /// An environment variable held a value that could not be interpreted.
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv {
        /// The variable name.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A level name failed to parse.
    #[error(transparent)]
    ParseLevel(#[from] LevelParseError),
    /// A console stream name failed to parse.
    #[error(transparent)]
    ParseStream(#[from] StreamParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn emit_error_chains_io_source() {
        let err = EmitError::new(
            Level::Error,
            SubscriberId::from_raw(3),
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        );
        assert_eq!(err.to_string(), "ERROR subscriber #3 failed");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.level(), Level::Error);
        assert_eq!(err.subscriber(), SubscriberId::from_raw(3));
        let source = err.source().expect("source present");
        assert_eq!(source.to_string(), "pipe closed");
    }

    #[test]
    fn parse_errors_convert_transparently() {
        let level_err = "loud".parse::<Level>().unwrap_err();
        let message = level_err.to_string();
        let err = LogError::from(level_err);
        assert!(matches!(err, LogError::ParseLevel(_)));
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn invalid_env_names_key_and_value() {
        let err = LogError::InvalidEnv {
            key: "CHANLOG_DEBUG",
            value: "maybe".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid value \"maybe\" for CHANLOG_DEBUG");
    }
}
