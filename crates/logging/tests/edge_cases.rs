//! Integration tests for message edge cases.
//!
//! These tests verify correct handling of empty messages, format braces,
//! long lines, unicode content, and label parsing boundaries.

use logging::{Level, log_to};
use test_support::{RecordingSubscriber, quiet_registry};

fn recorded(level: Level, emit: impl FnOnce(&logging::ChannelRegistry)) -> RecordingSubscriber {
    let registry = quiet_registry();
    let recorder = RecordingSubscriber::new();
    registry.get(level).subscribe(recorder.clone());
    emit(&registry);
    recorder
}

// ============================================================================
// Message Content Tests
// ============================================================================

/// Verifies an empty message still produces a labelled line.
#[test]
fn empty_message_keeps_label() {
    let recorder = recorded(Level::Info, |registry| registry.info().emit("").unwrap());
    let records = recorder.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, "[INFO] ");
    assert_eq!(records[0].message, "");
}

/// Verifies literal braces in a message are not treated as format syntax.
#[test]
fn braces_in_message_are_literal() {
    let recorder = recorded(Level::Warn, |registry| {
        registry.warn().emit("{not} a {} format").unwrap();
    });
    assert_eq!(recorder.lines(), ["[WARN] {not} a {} format"]);
}

/// Verifies escaped braces through the macro path.
#[test]
fn escaped_braces_through_macro() {
    let recorder = recorded(Level::Error, |registry| {
        log_to!(registry, Level::Error, "{{{}}}", 7).unwrap();
    });
    assert_eq!(recorder.lines(), ["[ERROR] {7}"]);
}

/// Verifies unicode content passes through unchanged.
#[test]
fn unicode_message_is_preserved() {
    let recorder = recorded(Level::Debug, |registry| {
        registry.debug().emit("файл 📁 überprüft").unwrap();
    });
    assert_eq!(recorder.records()[0].message, "файл 📁 überprüft");
}

/// Verifies long messages are not truncated.
#[test]
fn long_message_is_not_truncated() {
    let long = "x".repeat(64 * 1024);
    let recorder = recorded(Level::Fatal, |registry| registry.fatal().emit(&long).unwrap());
    let records = recorder.records();
    assert_eq!(records[0].message.len(), long.len());
    assert!(records[0].line.starts_with("[FATAL] xxx"));
}

/// Verifies embedded newlines stay inside a single record.
#[test]
fn embedded_newline_is_one_record() {
    let recorder = recorded(Level::Info, |registry| {
        registry.info().emit("line one\nline two").unwrap();
    });
    assert_eq!(recorder.len(), 1);
    assert_eq!(recorder.lines()[0], "[INFO] line one\nline two");
}

// ============================================================================
// Level Parsing Tests
// ============================================================================

/// Verifies label parsing accepts any case and surrounding whitespace.
#[test]
fn level_parsing_is_lenient() {
    assert_eq!(" warn ".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
}

/// Verifies unknown and empty labels are rejected with the input preserved.
#[test]
fn level_parsing_rejects_unknown() {
    for input in ["", "trace", "WARNING"] {
        let err = input.parse::<Level>().unwrap_err();
        assert_eq!(err.input(), input);
    }
}
