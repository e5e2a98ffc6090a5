#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides five severity channels (INFO, WARN, DEBUG, ERROR and
//! FATAL) shared by every thread of a process. Each channel carries an
//! enabled flag and an ordered list of subscribers; emitting a message on an
//! enabled channel formats it as `"[LABEL] message"` once and hands the
//! rendered line to each subscriber in registration order.
//!
//! # Design
//!
//! - A [`ChannelRegistry`] owns one lazily constructed slot per [`Level`].
//!   The first request for a level builds its channel exactly once, even when
//!   many threads race on it, and attaches a [`ConsoleSubscriber`] unless the
//!   registry's [`LogConfig`] disables it.
//! - Every access goes through a [`ChannelGuard`], which holds the channel's
//!   lock for its lifetime and releases it on every exit path.
//! - The process-wide registry is reached through [`global`] and the
//!   per-level free functions [`info`], [`warn`], [`debug`], [`error`] and
//!   [`fatal`]. Independent registries can be created for tests or embedding.
//! - The DEBUG channel starts disabled unless [`DEBUG_BUILD`] is set or the
//!   configuration says otherwise.
//!
//! # Invariants
//!
//! - A channel is constructed at most once per registry.
//! - Subscribers of one channel run in registration order, on the emitting
//!   thread, while the channel lock is held.
//! - A disabled channel neither formats its message nor calls a subscriber.
//!
//! # Errors
//!
//! [`Channel::emit`] returns an [`EmitError`] naming the first subscriber
//! that failed; later subscribers are skipped for that message.
//! Configuration and parsing failures surface as [`LogError`].
//!
//! # Examples
//!
//! ```
//! use logging::{ChannelRegistry, LogConfig, Record};
//! use std::sync::{Arc, Mutex};
//!
//! let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&lines);
//!
//! registry.info().subscribe_fn(move |record: &Record<'_>| {
//!     sink.lock().unwrap().push(record.line().to_owned());
//!     Ok(())
//! });
//!
//! registry.info().emit("service started")?;
//! assert_eq!(*lines.lock().unwrap(), ["[INFO] service started"]);
//! # Ok::<(), logging::EmitError>(())
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the line formatting and writer helpers used by the
//!   built-in subscribers.

mod channel;
mod config;
mod error;
mod global;
mod guard;
mod level;
mod macros;
mod record;
mod registry;
mod subscriber;

#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use channel::Channel;
pub use config::{CONSOLE_ENV, DEBUG_BUILD, DEBUG_ENV, LogConfig};
pub use error::{EmitError, LogError};
pub use global::{channel, debug, error, fatal, global, info, init, shared_registry, warn};
pub use guard::ChannelGuard;
pub use level::{Level, LevelParseError};
pub use logging_sink::{ConsoleStream, LineMode};
pub use record::Record;
pub use registry::ChannelRegistry;
pub use subscriber::{
    ConsoleSubscriber, FnSubscriber, Subscriber, SubscriberId, SubscriberList, WriterSubscriber,
    subscriber_fn,
};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    ChannelLayer, FORWARD_TARGET, TracingForwarder, init_tracing, init_tracing_with_filter,
};
