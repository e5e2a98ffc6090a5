//! Integration tests for the `chanlog` facade.
//!
//! These tests drive the channels only through the facade's re-exports, the
//! way a downstream application would.

use std::sync::Arc;

use chanlog::sink::{LineSink, format_line};
use chanlog::{ChannelRegistry, Level, LogConfig, LogError, WriterSubscriber};
use test_support::{OrderLog, RecordingSubscriber};

// ============================================================================
// Configuration Tests
// ============================================================================

/// Verifies environment-style configuration feeds channel construction.
#[test]
fn lookup_config_drives_construction() {
    let config = LogConfig::from_lookup(|key| match key {
        chanlog::DEBUG_ENV => Some("off".to_owned()),
        chanlog::CONSOLE_ENV => Some("none".to_owned()),
        _ => None,
    })
    .unwrap();
    let registry = ChannelRegistry::with_config(config);

    assert!(!registry.debug().is_enabled());
    assert_eq!(registry.info().subscriber_count(), 0);
}

/// Verifies bad environment values surface as configuration errors.
#[test]
fn lookup_config_reports_bad_values() {
    let err = LogConfig::from_lookup(|key| {
        (key == chanlog::DEBUG_ENV).then(|| "maybe".to_owned())
    })
    .unwrap_err();
    assert!(matches!(err, LogError::InvalidEnv { .. }));
    assert!(err.to_string().contains("maybe"));
}

// ============================================================================
// End-to-End Tests
// ============================================================================

/// Verifies an application-style setup with several subscribers per channel.
#[test]
fn application_setup_routes_by_level() {
    let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
    let problems = Arc::new(WriterSubscriber::new(Vec::new()));
    let everything = RecordingSubscriber::new();
    let order = OrderLog::new();

    for level in Level::ALL {
        let mut channel = registry.get(level);
        channel.subscribe(everything.clone());
        if matches!(level, Level::Warn | Level::Error | Level::Fatal) {
            channel.subscribe_shared(problems.clone());
        }
    }
    registry.error().subscribe(order.tagged("after-writer"));

    chanlog::log_to!(registry, Level::Info, "listening on {}", 8080).unwrap();
    chanlog::log_to!(registry, Level::Error, "peer {} reset", "10.0.0.2").unwrap();

    assert_eq!(everything.len(), 2);
    assert_eq!(order.entries(), ["after-writer"]);
    let text = problems.with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
    assert_eq!(text, "[ERROR] peer 10.0.0.2 reset\n");
}

/// Verifies the sink helpers render lines the same way the channels do.
#[test]
fn sink_helpers_match_channel_format() {
    let line = format_line(Level::Fatal.label(), format_args!("out of {}", "memory"));
    let mut sink = LineSink::new(Vec::new());
    sink.write_line(line.as_str()).unwrap();

    let registry = ChannelRegistry::with_config(LogConfig::default().with_console(None));
    let writer = Arc::new(WriterSubscriber::new(Vec::new()));
    registry.fatal().subscribe_shared(writer.clone());
    registry.fatal().emit("out of memory").unwrap();

    let from_channel = writer.with_writer(|buf| buf.clone());
    assert_eq!(sink.into_inner(), from_channel);
}
