//! crates/logging/src/guard.rs
//! Scoped exclusive access to a channel.

use std::fmt;
use std::io;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::channel::Channel;
use crate::record::Record;
use crate::subscriber::{Subscriber, SubscriberId};

/// RAII handle granting exclusive access to one [`Channel`].
///
/// A guard is obtained from a [`ChannelRegistry`](crate::ChannelRegistry)
/// accessor and holds the channel's lock for as long as it lives. Dropping
/// it releases the lock exactly once, whether the scope ends normally,
/// returns early through `?`, or unwinds from a panic. The guard is neither
/// `Clone` nor `Send`; moving it transfers the unlock obligation.
///
/// Read access and emits are reached through [`Deref`]. Mutation is limited
/// to the forwarding methods below, so a channel can never be replaced
/// wholesale and its level always matches the slot it was built for.
///
/// # Examples
///
/// ```
/// use logging::{ChannelRegistry, LogConfig};
///
/// let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
/// {
///     let mut debug = registry.debug();
///     debug.set_enabled(true);
///     debug.emit("cache warmed")?;
/// } // lock released here
///
/// assert!(registry.debug().is_enabled());
/// # Ok::<(), logging::EmitError>(())
/// ```
///
/// Two guards cannot exchange their channels:
///
/// ```compile_fail
/// use logging::{ChannelRegistry, LogConfig};
///
/// let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
/// let mut info = registry.info();
/// let mut warn = registry.warn();
/// std::mem::swap(&mut *info, &mut *warn);
/// ```
#[must_use = "dropping the guard immediately releases the channel lock"]
pub struct ChannelGuard<'a> {
    channel: MutexGuard<'a, Channel>,
}

impl<'a> ChannelGuard<'a> {
    /// Acquires `slot` and wraps the held lock.
    ///
    /// A poisoned lock is recovered: poisoning only means a subscriber
    /// panicked mid-dispatch, and every channel field is consistent between
    /// statements.
    pub(crate) fn lock(slot: &'a Mutex<Channel>) -> Self {
        Self {
            channel: slot.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }
}

impl ChannelGuard<'_> {
    /// Enables or disables the channel for all subsequent emits.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.channel.set_enabled(enabled);
    }

    /// Registers `subscriber` after all existing ones.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriberId
    where
        S: Subscriber + 'static,
    {
        self.channel.subscribe(subscriber)
    }

    /// Registers a closure after all existing subscribers.
    ///
    /// ```
    /// use logging::{ChannelRegistry, LogConfig, Record};
    ///
    /// let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
    /// registry.warn().subscribe_fn(|record: &Record<'_>| {
    ///     assert_eq!(record.label(), "WARN");
    ///     Ok(())
    /// });
    /// registry.warn().emit("low disk")?;
    /// # Ok::<(), logging::EmitError>(())
    /// ```
    pub fn subscribe_fn<F>(&mut self, f: F) -> SubscriberId
    where
        F: Fn(&Record<'_>) -> io::Result<()> + Send + Sync + 'static,
    {
        self.channel.subscribe_fn(f)
    }

    /// Registers a shared subscriber after all existing ones.
    ///
    /// The same `Arc` may be registered on several channels, or several
    /// times on one channel; each registration gets its own handle.
    pub fn subscribe_shared(&mut self, subscriber: Arc<dyn Subscriber>) -> SubscriberId {
        self.channel.subscribe_shared(subscriber)
    }

    /// Removes the registration identified by `id`.
    ///
    /// Returns `false`, and changes nothing, when `id` is not registered,
    /// for example because it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.channel.unsubscribe(id)
    }

    /// Removes every subscriber, including the default one attached at
    /// construction.
    pub fn clear_subscribers(&mut self) {
        self.channel.clear_subscribers();
    }
}

impl Deref for ChannelGuard<'_> {
    type Target = Channel;

    fn deref(&self) -> &Self::Target {
        &self.channel
    }
}

impl fmt::Debug for ChannelGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChannelGuard").field(&*self.channel).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use std::panic::{self, AssertUnwindSafe};

    fn slot() -> Mutex<Channel> {
        Mutex::new(Channel::new(Level::Info, true))
    }

    #[test]
    fn guard_holds_lock_until_dropped() {
        let slot = slot();
        let guard = ChannelGuard::lock(&slot);
        assert!(slot.try_lock().is_err());
        drop(guard);
        assert!(slot.try_lock().is_ok());
    }

    #[test]
    fn moved_guard_keeps_lock() {
        let slot = slot();
        let guard = ChannelGuard::lock(&slot);
        let moved = guard;
        assert!(slot.try_lock().is_err());
        drop(moved);
        assert!(slot.try_lock().is_ok());
    }

    #[test]
    fn early_return_releases_lock() {
        fn step(ok: bool) -> Result<(), &'static str> {
            if ok { Ok(()) } else { Err("bail out") }
        }

        fn disable_then_fail(slot: &Mutex<Channel>, ok: bool) -> Result<(), &'static str> {
            let mut guard = ChannelGuard::lock(slot);
            guard.set_enabled(false);
            step(ok)?;
            guard.set_enabled(true);
            Ok(())
        }

        let slot = slot();
        assert!(disable_then_fail(&slot, false).is_err());
        let guard = slot.try_lock().expect("lock released after early return");
        assert!(!guard.is_enabled());
    }

    #[test]
    fn panic_releases_lock_and_guard_recovers() {
        let slot = slot();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut guard = ChannelGuard::lock(&slot);
            guard.set_enabled(false);
            panic!("subscriber blew up");
        }));
        assert!(result.is_err());
        assert!(slot.is_poisoned());

        let guard = ChannelGuard::lock(&slot);
        assert!(!guard.is_enabled());
    }

    #[test]
    fn forwarded_mutators_reach_channel() {
        let slot = slot();
        let mut guard = ChannelGuard::lock(&slot);
        let first = guard.subscribe_fn(|_record: &Record<'_>| Ok(()));
        let second = guard.subscribe_fn(|_record: &Record<'_>| Ok(()));
        guard.set_enabled(false);
        assert_eq!(guard.subscriber_count(), 2);
        assert!(!guard.is_enabled());

        assert!(guard.unsubscribe(first));
        assert!(!guard.unsubscribe(first));
        assert!(guard.subscribers().contains(second));

        guard.clear_subscribers();
        assert_eq!(guard.subscriber_count(), 0);
        assert_eq!(guard.level(), Level::Info);
        assert_eq!(guard.label(), "INFO");
    }

    #[test]
    fn debug_wraps_channel() {
        let slot = slot();
        let guard = ChannelGuard::lock(&slot);
        assert!(format!("{guard:?}").starts_with("ChannelGuard(Channel"));
    }
}
