//! crates/logging/src/subscriber/mod.rs
//! Subscriber callbacks and the ordered registry a channel dispatches to.
//!
//! A [`Subscriber`] is anything that can receive a [`Record`]. Channels keep
//! their subscribers in a [`SubscriberList`], invoke them in registration
//! order on the emitting thread, and hand back a [`SubscriberId`] per
//! registration so callers can remove exactly that registration later.

use std::fmt;
use std::io;

use crate::record::Record;

mod console;
mod list;
mod writer;

pub use console::ConsoleSubscriber;
pub use list::SubscriberList;
pub use writer::WriterSubscriber;

/// Receives every message accepted by the channels it is registered with.
///
/// Implementations run synchronously while the channel's lock is held. They
/// must not access the same channel again from inside
/// [`on_record`](Self::on_record); the lock is not recursive and doing so
/// deadlocks.
///
/// Returning an error aborts the current dispatch: the channel returns the
/// error from `emit` and skips the remaining subscribers for that message.
pub trait Subscriber: Send + Sync {
    /// Handles one accepted message.
    fn on_record(&self, record: &Record<'_>) -> io::Result<()>;
}

/// Adapter that turns a closure into a [`Subscriber`].
///
/// Construct it with [`subscriber_fn`].
#[derive(Clone)]
pub struct FnSubscriber<F> {
    f: F,
}

/// Wraps a closure as a [`Subscriber`].
///
/// # Examples
///
/// ```
/// use logging::{ChannelRegistry, LogConfig, Record, subscriber_fn};
/// use std::sync::{Arc, Mutex};
///
/// let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// registry.warn().subscribe(subscriber_fn(move |record: &Record<'_>| {
///     sink.lock().unwrap().push(record.line().to_owned());
///     Ok(())
/// }));
/// registry.warn().emit("disk at 91%").unwrap();
///
/// assert_eq!(*seen.lock().unwrap(), ["[WARN] disk at 91%"]);
/// ```
pub const fn subscriber_fn<F>(f: F) -> FnSubscriber<F>
where
    F: Fn(&Record<'_>) -> io::Result<()> + Send + Sync,
{
    FnSubscriber { f }
}

impl<F> Subscriber for FnSubscriber<F>
where
    F: Fn(&Record<'_>) -> io::Result<()> + Send + Sync,
{
    fn on_record(&self, record: &Record<'_>) -> io::Result<()> {
        (self.f)(record)
    }
}

impl<F> fmt::Debug for FnSubscriber<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSubscriber").finish_non_exhaustive()
    }
}

/// Handle identifying one registration on one channel.
///
/// Handles are unique per channel for the channel's lifetime and are never
/// reused, so removing a stale handle can never remove a newer registration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the numeric value of the handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
