#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `chanlog` is the facade over the workspace's logging crates. It re-exports
//! the severity channels from [`logging`] and the line formatting helpers
//! from [`logging_sink`] so applications depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use chanlog::{ChannelRegistry, LogConfig, WriterSubscriber};
//! use std::sync::Arc;
//!
//! let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
//! let capture = Arc::new(WriterSubscriber::new(Vec::new()));
//! registry.warn().subscribe_shared(capture.clone());
//!
//! chanlog::log_to!(registry, chanlog::Level::Warn, "{} of {} workers idle", 3, 8)?;
//!
//! let text = capture.with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
//! assert_eq!(text, "[WARN] 3 of 8 workers idle\n");
//! # Ok::<(), chanlog::EmitError>(())
//! ```

pub use logging::*;

/// Line formatting and writer helpers used by the built-in subscribers.
pub mod sink {
    pub use logging_sink::{FormattedLine, LineSink, StreamParseError, format_line};
}
