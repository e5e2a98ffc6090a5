//! crates/logging/src/config.rs
//! Construction-time defaults for the channels of one registry.

use logging_sink::{ConsoleStream, LineMode};

use crate::error::LogError;
use crate::level::Level;

/// Whether this build enables the DEBUG channel by default.
///
/// True for debug builds and for any build with the `debug-channel` feature.
pub const DEBUG_BUILD: bool = cfg!(any(debug_assertions, feature = "debug-channel"));

/// Environment variable overriding [`LogConfig::debug_enabled`].
pub const DEBUG_ENV: &str = "CHANLOG_DEBUG";

/// Environment variable overriding [`LogConfig::console`].
pub const CONSOLE_ENV: &str = "CHANLOG_CONSOLE";

/// Defaults applied when a registry constructs each of its channels.
///
/// Changing a config after a channel exists has no effect on that channel;
/// runtime changes go through the channel's guard instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Initial enabled state of the DEBUG channel.
    pub debug_enabled: bool,
    /// Stream for the default console subscriber, or `None` to construct
    /// channels without one.
    pub console: Option<ConsoleStream>,
    /// Line termination used by the default console subscriber.
    pub line_mode: LineMode,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug_enabled: DEBUG_BUILD,
            console: Some(ConsoleStream::Stdout),
            line_mode: LineMode::WithNewline,
        }
    }
}

impl LogConfig {
    /// Sets the initial DEBUG channel state.
    pub fn with_debug_enabled(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Sets the default console stream; `None` disables the console
    /// subscriber.
    pub fn with_console(mut self, console: Option<ConsoleStream>) -> Self {
        self.console = console;
        self
    }

    /// Sets the default console subscriber's line termination.
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Returns whether a freshly constructed channel for `level` starts
    /// enabled.
    #[must_use]
    pub const fn enabled_by_default(&self, level: Level) -> bool {
        level.enabled_by_default(self.debug_enabled)
    }

    /// Builds a config from the process environment.
    ///
    /// Reads [`DEBUG_ENV`] and [`CONSOLE_ENV`]; unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<Self, LogError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Accepted values: `1|0|true|false|on|off|yes|no` for [`DEBUG_ENV`], and
    /// `stdout|stderr|off|none` for [`CONSOLE_ENV`], all case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{LogConfig, ConsoleStream};
    ///
    /// let config = LogConfig::from_lookup(|key| match key {
    ///     "CHANLOG_DEBUG" => Some("on".to_owned()),
    ///     "CHANLOG_CONSOLE" => Some("stderr".to_owned()),
    ///     _ => None,
    /// })?;
    /// assert!(config.debug_enabled);
    /// assert_eq!(config.console, Some(ConsoleStream::Stderr));
    /// # Ok::<(), logging::LogError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEBUG_ENV) {
            config.debug_enabled = parse_switch(&value).ok_or(LogError::InvalidEnv {
                key: DEBUG_ENV,
                value,
            })?;
        }

        if let Some(value) = lookup(CONSOLE_ENV) {
            config.console = parse_console(&value)?;
        }

        Ok(config)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    const ON: [&str; 4] = ["1", "true", "on", "yes"];
    const OFF: [&str; 4] = ["0", "false", "off", "no"];

    let value = value.trim();
    if ON.iter().any(|token| value.eq_ignore_ascii_case(token)) {
        Some(true)
    } else if OFF.iter().any(|token| value.eq_ignore_ascii_case(token)) {
        Some(false)
    } else {
        None
    }
}

fn parse_console(value: &str) -> Result<Option<ConsoleStream>, LogError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("off") || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Ok(Some(trimmed.parse()?))
}
