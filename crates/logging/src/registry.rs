//! crates/logging/src/registry.rs
//! Five lazily constructed channel slots, one per level.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use crate::channel::Channel;
use crate::config::LogConfig;
use crate::guard::ChannelGuard;
use crate::level::Level;
use crate::subscriber::{ConsoleSubscriber, Subscriber};

/// Owner of the five severity channels.
///
/// Each channel is built the first time any thread asks for its level. When
/// several threads race on that first request exactly one of them runs the
/// construction and the others block until it completes; all of them then
/// receive the same channel. Construction attaches one default subscriber:
/// the one given to [`with_default_subscriber`](Self::with_default_subscriber)
/// if any, otherwise a [`ConsoleSubscriber`] unless the registry's
/// [`LogConfig`] disables it.
///
/// Every accessor returns a [`ChannelGuard`] that holds the channel's lock.
/// Holding two guards for the same level on one thread deadlocks.
///
/// The process-wide instance lives behind [`global`](crate::global); tests
/// and embedders can create independent registries freely.
///
/// # Examples
///
/// ```
/// use logging::{ChannelRegistry, Level, LogConfig};
///
/// let registry = ChannelRegistry::with_config(
///     LogConfig::default().with_console(None).with_debug_enabled(false),
/// );
/// assert!(!registry.is_constructed(Level::Warn));
///
/// registry.warn().emit("first use builds the channel")?;
/// assert!(registry.is_constructed(Level::Warn));
/// assert!(!registry.debug().is_enabled());
/// assert_eq!(registry.constructed_count(), 2);
/// # Ok::<(), logging::EmitError>(())
/// ```
pub struct ChannelRegistry {
    config: LogConfig,
    default_subscriber: Option<Arc<dyn Subscriber>>,
    slots: [OnceLock<Mutex<Channel>>; Level::COUNT],
    constructed: AtomicUsize,
}

impl ChannelRegistry {
    /// Creates a registry using [`LogConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogConfig::default())
    }

    /// Creates a registry whose channels are built from `config`.
    #[must_use]
    pub const fn with_config(config: LogConfig) -> Self {
        Self {
            config,
            default_subscriber: None,
            slots: [const { OnceLock::new() }; Level::COUNT],
            constructed: AtomicUsize::new(0),
        }
    }

    /// Creates a registry that attaches `subscriber` to every channel at
    /// construction in place of the console subscriber.
    ///
    /// Every channel shares the same `Arc`. The console settings in `config`
    /// are ignored; its enabled defaults still apply.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use logging::{ChannelRegistry, LogConfig, WriterSubscriber};
    ///
    /// let capture = Arc::new(WriterSubscriber::new(Vec::new()));
    /// let registry = ChannelRegistry::with_default_subscriber(
    ///     LogConfig::default().with_debug_enabled(true),
    ///     capture.clone(),
    /// );
    /// registry.debug().emit("x")?;
    /// assert_eq!(capture.with_writer(|buf| buf.clone()), b"[DEBUG] x\n");
    /// # Ok::<(), logging::EmitError>(())
    /// ```
    #[must_use]
    pub fn with_default_subscriber(config: LogConfig, subscriber: Arc<dyn Subscriber>) -> Self {
        Self {
            default_subscriber: Some(subscriber),
            ..Self::with_config(config)
        }
    }

    /// Returns the construction defaults.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Returns a guard for `level`'s channel, constructing it on first use.
    pub fn get(&self, level: Level) -> ChannelGuard<'_> {
        ChannelGuard::lock(self.slot(level))
    }

    /// Returns a guard for the INFO channel.
    pub fn info(&self) -> ChannelGuard<'_> {
        self.get(Level::Info)
    }

    /// Returns a guard for the WARN channel.
    pub fn warn(&self) -> ChannelGuard<'_> {
        self.get(Level::Warn)
    }

    /// Returns a guard for the DEBUG channel.
    pub fn debug(&self) -> ChannelGuard<'_> {
        self.get(Level::Debug)
    }

    /// Returns a guard for the ERROR channel.
    pub fn error(&self) -> ChannelGuard<'_> {
        self.get(Level::Error)
    }

    /// Returns a guard for the FATAL channel.
    pub fn fatal(&self) -> ChannelGuard<'_> {
        self.get(Level::Fatal)
    }

    /// Reports whether `level`'s channel has been constructed, without
    /// constructing it.
    #[must_use]
    pub fn is_constructed(&self, level: Level) -> bool {
        self.slots[level.index()].get().is_some()
    }

    /// Returns how many channels have been constructed so far.
    #[must_use]
    pub fn constructed_count(&self) -> usize {
        self.constructed.load(Ordering::Acquire)
    }

    fn slot(&self, level: Level) -> &Mutex<Channel> {
        self.slots[level.index()].get_or_init(|| Mutex::new(self.build(level)))
    }

    fn build(&self, level: Level) -> Channel {
        let mut channel = Channel::new(level, self.config.enabled_by_default(level));
        if let Some(subscriber) = &self.default_subscriber {
            channel.subscribe_shared(Arc::clone(subscriber));
        } else if let Some(stream) = self.config.console {
            channel.subscribe(ConsoleSubscriber::with_line_mode(
                stream,
                self.config.line_mode,
            ));
        }
        self.constructed.fetch_add(1, Ordering::AcqRel);
        channel
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChannelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constructed: Vec<_> = Level::ALL
            .into_iter()
            .filter(|level| self.is_constructed(*level))
            .collect();
        f.debug_struct("ChannelRegistry")
            .field("config", &self.config)
            .field("custom_default", &self.default_subscriber.is_some())
            .field("constructed", &constructed)
            .finish()
    }
}
