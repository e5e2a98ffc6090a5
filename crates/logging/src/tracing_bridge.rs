//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the severity channels.
//!
//! Two directions are supported:
//!
//! - [`ChannelLayer`] is a tracing-subscriber layer that routes tracing events
//!   into a [`ChannelRegistry`], mapping tracing levels onto channels.
//! - [`TracingForwarder`] is a channel [`Subscriber`] that re-emits accepted
//!   records as tracing events under the [`FORWARD_TARGET`] target.
//!
//! The layer ignores events under [`FORWARD_TARGET`], so both can be
//! installed at once without a record bouncing between them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::init_tracing;
//!
//! init_tracing();
//!
//! // Standard tracing macros now land on the global channels.
//! tracing::warn!("disk at {}%", 91);
//! tracing::debug!("cache miss");
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level as TracingLevel};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::global::shared_registry;
use crate::level::Level;
use crate::record::Record;
use crate::registry::ChannelRegistry;
use crate::subscriber::Subscriber;

/// Target of every event produced by [`TracingForwarder`].
pub const FORWARD_TARGET: &str = "chanlog::forward";

/// A tracing layer that emits events on the channels of one registry.
///
/// `ERROR`, `WARN` and `INFO` events map to the channel of the same name;
/// `DEBUG` and `TRACE` both map to the DEBUG channel. Events on a disabled
/// channel are dropped before their fields are visited. Subscriber failures
/// are discarded because a layer has no caller to report them to.
pub struct ChannelLayer {
    registry: Arc<ChannelRegistry>,
}

impl ChannelLayer {
    /// Creates a layer writing into `registry`.
    #[must_use]
    pub const fn new(registry: Arc<ChannelRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a layer writing into the process-wide registry.
    #[must_use]
    pub fn global() -> Self {
        Self::new(shared_registry())
    }

    /// Returns the registry this layer writes into.
    #[must_use]
    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Map a tracing level to a channel level.
    const fn channel_level(level: &TracingLevel) -> Level {
        match *level {
            TracingLevel::ERROR => Level::Error,
            TracingLevel::WARN => Level::Warn,
            TracingLevel::INFO => Level::Info,
            TracingLevel::DEBUG | TracingLevel::TRACE => Level::Debug,
        }
    }

    fn is_forwarded(target: &str) -> bool {
        target.starts_with(FORWARD_TARGET)
    }
}

impl fmt::Debug for ChannelLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelLayer").finish_non_exhaustive()
    }
}

impl<S> Layer<S> for ChannelLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if Self::is_forwarded(metadata.target()) {
            return;
        }

        let channel = self.registry.get(Self::channel_level(metadata.level()));
        if !channel.is_enabled() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            let _ = channel.emit(message);
        }
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// A channel subscriber that re-emits records as tracing events.
///
/// FATAL records become `ERROR` events; every event carries the channel
/// label in a `label` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingForwarder;

impl TracingForwarder {
    /// Creates a forwarder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Subscriber for TracingForwarder {
    fn on_record(&self, record: &Record<'_>) -> io::Result<()> {
        let label = record.label();
        let message = record.message();
        match record.level() {
            Level::Info => {
                tracing::event!(
                    target: FORWARD_TARGET,
                    TracingLevel::INFO,
                    label = label,
                    "{message}"
                );
            }
            Level::Warn => {
                tracing::event!(
                    target: FORWARD_TARGET,
                    TracingLevel::WARN,
                    label = label,
                    "{message}"
                );
            }
            Level::Debug => {
                tracing::event!(
                    target: FORWARD_TARGET,
                    TracingLevel::DEBUG,
                    label = label,
                    "{message}"
                );
            }
            Level::Error | Level::Fatal => {
                tracing::event!(
                    target: FORWARD_TARGET,
                    TracingLevel::ERROR,
                    label = label,
                    "{message}"
                );
            }
        }
        Ok(())
    }
}

/// Initialize tracing so that events land on the global channels.
///
/// Installs a registry subscriber with a [`ChannelLayer`] over
/// [`shared_registry`] as the global default. Panics if a global tracing
/// subscriber is already set, as `tracing_subscriber`'s `init` does.
///
/// # Example
///
/// ```rust,ignore
/// logging::init_tracing();
/// tracing::error!("request failed");
/// ```
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ChannelLayer::global())
        .init();
}

/// Initialize tracing with a filter layer in front of the channels.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::filter::LevelFilter;
///
/// logging::init_tracing_with_filter(LevelFilter::WARN);
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(ChannelLayer::global())
        .init();
}
