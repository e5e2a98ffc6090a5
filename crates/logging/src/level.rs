//! crates/logging/src/level.rs
//! The fixed set of severity levels, one per channel.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity level identifying one channel.
///
/// The declaration order is the slot order used by
/// [`ChannelRegistry`](crate::ChannelRegistry); it is not a severity ranking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Level {
    /// Routine operational messages.
    Info,
    /// Recoverable anomalies.
    Warn,
    /// Developer diagnostics, disabled by default in release builds.
    Debug,
    /// Failed operations.
    Error,
    /// Failures the process cannot continue from.
    Fatal,
}

impl Level {
    /// Every level, in slot order.
    pub const ALL: [Self; 5] = [Self::Info, Self::Warn, Self::Debug, Self::Error, Self::Fatal];

    /// Number of levels and therefore of channels per registry.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the immutable label the channel prints in front of each line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Debug => "DEBUG",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the level's slot index in `0..Level::COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns whether a freshly constructed channel for this level starts
    /// enabled, given the DEBUG policy in effect.
    #[must_use]
    pub const fn enabled_by_default(self, debug_enabled: bool) -> bool {
        match self {
            Self::Debug => debug_enabled,
            Self::Info | Self::Warn | Self::Error | Self::Fatal => true,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known [`Level`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level {input:?}; expected one of INFO, WARN, DEBUG, ERROR, FATAL")]
pub struct LevelParseError {
    input: String,
}

impl LevelParseError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| trimmed.eq_ignore_ascii_case(level.label()))
            .ok_or_else(|| LevelParseError {
                input: s.to_owned(),
            })
    }
}
