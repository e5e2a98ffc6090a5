//! crates/logging/src/macros.rs
//! Formatting macros over the global channels.
//!
//! Each macro locks its channel for the duration of one emit and evaluates to
//! `Result<(), EmitError>`. Arguments are only formatted when the channel is
//! enabled.

/// Emit a message on an explicit registry's channel.
///
/// # Example
/// ```
/// use logging::{ChannelRegistry, Level, LogConfig, log_to};
///
/// let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
/// log_to!(registry, Level::Warn, "{} retries left", 2)?;
/// # Ok::<(), logging::EmitError>(())
/// ```
#[macro_export]
macro_rules! log_to {
    ($registry:expr, $level:expr, $($arg:tt)+) => {
        $registry.get($level).emit_fmt(::std::format_args!($($arg)+))
    };
}

/// Emit on the global INFO channel.
///
/// # Example
/// ```ignore
/// info_log!("listening on {}", addr)?;
/// ```
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)+) => {
        $crate::info().emit_fmt(::std::format_args!($($arg)+))
    };
}

/// Emit on the global WARN channel.
///
/// # Example
/// ```ignore
/// warn_log!("{} retries left", remaining)?;
/// ```
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)+) => {
        $crate::warn().emit_fmt(::std::format_args!($($arg)+))
    };
}

/// Emit on the global DEBUG channel.
///
/// # Example
/// ```ignore
/// debug_log!("cache state: {:?}", cache)?;
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        $crate::debug().emit_fmt(::std::format_args!($($arg)+))
    };
}

/// Emit on the global ERROR channel.
///
/// # Example
/// ```ignore
/// error_log!("request {} failed: {}", id, err)?;
/// ```
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)+) => {
        $crate::error().emit_fmt(::std::format_args!($($arg)+))
    };
}

/// Emit on the global FATAL channel.
///
/// # Example
/// ```ignore
/// fatal_log!("cannot continue: {}", reason)?;
/// ```
#[macro_export]
macro_rules! fatal_log {
    ($($arg:tt)+) => {
        $crate::fatal().emit_fmt(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{ChannelRegistry, Level, LogConfig, Record};
    use std::sync::{Arc, Mutex};

    #[test]
    fn log_to_formats_through_registry() {
        let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        registry.error().subscribe_fn(move |record: &Record<'_>| {
            sink.lock().unwrap().push(record.line().to_owned());
            Ok(())
        });

        log_to!(registry, Level::Error, "code {}", 23).unwrap();
        log_to!(&registry, Level::Error, "plain").unwrap();

        assert_eq!(*lines.lock().unwrap(), ["[ERROR] code 23", "[ERROR] plain"]);
    }

    #[test]
    fn log_to_skips_disabled_channel() {
        let registry = ChannelRegistry::with_config(
            LogConfig::default().with_console(None).with_debug_enabled(false),
        );
        let lines = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = Arc::clone(&lines);
        registry.debug().subscribe_fn(move |record: &Record<'_>| {
            sink.lock().unwrap().push(record.line().to_owned());
            Ok(())
        });

        log_to!(registry, Level::Debug, "hidden {}", 1).unwrap();
        assert!(lines.lock().unwrap().is_empty());
    }
}
