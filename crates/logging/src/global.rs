//! crates/logging/src/global.rs
//! The process-wide registry and its free-function accessors.

use std::sync::{Arc, OnceLock};

use crate::config::LogConfig;
use crate::error::LogError;
use crate::guard::ChannelGuard;
use crate::level::Level;
use crate::registry::ChannelRegistry;

static GLOBAL: OnceLock<Arc<ChannelRegistry>> = OnceLock::new();

/// Returns the process-wide registry, creating it with
/// [`LogConfig::default`] on first use.
pub fn global() -> &'static ChannelRegistry {
    GLOBAL.get_or_init(|| Arc::new(ChannelRegistry::new()))
}

/// Installs `config` as the process-wide registry's configuration.
///
/// Must run before anything touches the global registry; afterwards it fails
/// with [`LogError::AlreadyInitialized`] and leaves the existing registry
/// untouched.
///
/// # Examples
///
/// ```
/// use logging::{LogConfig, LogError};
///
/// let registry = logging::init(LogConfig::default().with_console(None))?;
/// assert!(registry.config().console.is_none());
///
/// assert!(matches!(
///     logging::init(LogConfig::default()),
///     Err(LogError::AlreadyInitialized)
/// ));
/// # Ok::<(), LogError>(())
/// ```
pub fn init(config: LogConfig) -> Result<&'static ChannelRegistry, LogError> {
    let mut installed = false;
    let registry = GLOBAL.get_or_init(|| {
        installed = true;
        Arc::new(ChannelRegistry::with_config(config))
    });
    if installed {
        Ok(registry)
    } else {
        Err(LogError::AlreadyInitialized)
    }
}

/// Returns a shared handle to the process-wide registry, for owners that
/// need `Arc` semantics such as tracing layers.
pub fn shared_registry() -> Arc<ChannelRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(ChannelRegistry::new())))
}

/// Returns a guard for the global channel of `level`.
pub fn channel(level: Level) -> ChannelGuard<'static> {
    global().get(level)
}

/// Returns a guard for the global INFO channel.
pub fn info() -> ChannelGuard<'static> {
    global().info()
}

/// Returns a guard for the global WARN channel.
pub fn warn() -> ChannelGuard<'static> {
    global().warn()
}

/// Returns a guard for the global DEBUG channel.
pub fn debug() -> ChannelGuard<'static> {
    global().debug()
}

/// Returns a guard for the global ERROR channel.
pub fn error() -> ChannelGuard<'static> {
    global().error()
}

/// Returns a guard for the global FATAL channel.
pub fn fatal() -> ChannelGuard<'static> {
    global().fatal()
}
