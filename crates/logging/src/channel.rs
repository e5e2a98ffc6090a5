//! crates/logging/src/channel.rs
//! A single severity channel: label, enabled flag and subscribers.

use std::fmt;
use std::io;
use std::sync::Arc;

use logging_sink::format_line;

use crate::error::EmitError;
use crate::level::Level;
use crate::record::Record;
use crate::subscriber::{Subscriber, SubscriberId, SubscriberList, subscriber_fn};

/// One severity channel.
///
/// Channels only exist inside a [`ChannelRegistry`](crate::ChannelRegistry)
/// and are only reachable through a [`ChannelGuard`](crate::ChannelGuard),
/// so every method here runs with the channel's lock held.
///
/// A channel is either enabled or disabled.
/// [`ChannelGuard::set_enabled`](crate::ChannelGuard::set_enabled) is the only
/// transition; there is no terminal state. The guard only hands out shared
/// references to the channel itself, so its level and label are fixed once
/// built.
pub struct Channel {
    level: Level,
    enabled: bool,
    subscribers: SubscriberList,
}

impl Channel {
    pub(crate) const fn new(level: Level, enabled: bool) -> Self {
        Self {
            level,
            enabled,
            subscribers: SubscriberList::new(),
        }
    }

    /// Returns the channel's level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the label printed in front of every line.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.level.label()
    }

    /// Returns whether [`emit`](Self::emit) currently delivers messages.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the channel for all subsequent emits.
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the registered subscribers.
    #[must_use]
    pub const fn subscribers(&self) -> &SubscriberList {
        &self.subscribers
    }

    /// Returns the number of registrations.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Registers `subscriber` after all existing ones.
    pub(crate) fn subscribe<S>(&mut self, subscriber: S) -> SubscriberId
    where
        S: Subscriber + 'static,
    {
        self.subscribers.push(Arc::new(subscriber))
    }

    /// Registers a closure after all existing subscribers.
    pub(crate) fn subscribe_fn<F>(&mut self, f: F) -> SubscriberId
    where
        F: Fn(&Record<'_>) -> io::Result<()> + Send + Sync + 'static,
    {
        self.subscribe(subscriber_fn(f))
    }

    /// Registers a shared subscriber after all existing ones.
    ///
    /// The same `Arc` may be registered on several channels, or several
    /// times on one channel; each registration gets its own handle.
    pub(crate) fn subscribe_shared(&mut self, subscriber: Arc<dyn Subscriber>) -> SubscriberId {
        self.subscribers.push(subscriber)
    }

    /// Removes the registration identified by `id`.
    ///
    /// Returns `false`, and changes nothing, when `id` is not registered,
    /// for example because it was already removed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(id)
    }

    /// Removes every subscriber, including the default console subscriber.
    pub(crate) fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    /// Formats `message` and hands it to every subscriber in registration
    /// order.
    ///
    /// A disabled channel returns `Ok(())` without formatting anything. The
    /// first subscriber error is returned as-is and the remaining subscribers
    /// are skipped for this message.
    pub fn emit<M>(&self, message: M) -> Result<(), EmitError>
    where
        M: fmt::Display,
    {
        self.emit_fmt(format_args!("{message}"))
    }

    /// Like [`emit`](Self::emit) but takes pre-captured format arguments,
    /// which are only rendered when the channel is enabled.
    pub fn emit_fmt(&self, args: fmt::Arguments<'_>) -> Result<(), EmitError> {
        if !self.enabled {
            return Ok(());
        }
        let line = format_line(self.label(), args);
        self.subscribers.dispatch(&Record::new(self.level, &line))
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("label", &self.label())
            .field("enabled", &self.enabled)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
