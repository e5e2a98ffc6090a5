//! Integration tests for channels writing into log files.

use std::io::BufWriter;
use std::sync::Arc;

use logging::{Level, LineMode, WriterSubscriber};
use test_support::{TempLogFile, quiet_registry};

/// Verifies each emit lands as one line in the file, in emit order.
#[test]
fn writer_subscriber_appends_lines_to_file() {
    let file = TempLogFile::new("app.log").unwrap();
    let registry = quiet_registry();
    let writer = Arc::new(WriterSubscriber::new(file.open_append().unwrap()));
    for level in [Level::Info, Level::Error] {
        registry.get(level).subscribe_shared(writer.clone());
    }

    registry.info().emit("started").unwrap();
    registry.error().emit("failed to bind").unwrap();
    registry.warn().emit("not subscribed").unwrap();

    assert_eq!(file.read().unwrap(), "[INFO] started\n[ERROR] failed to bind\n");
}

/// Verifies a buffered file writer is flushed after every record.
#[test]
fn buffered_writer_is_flushed_per_record() {
    let file = TempLogFile::new("buffered.log").unwrap();
    let registry = quiet_registry();
    let handle = file.open_append().unwrap();
    registry
        .warn()
        .subscribe(WriterSubscriber::new(BufWriter::new(handle)));

    registry.warn().emit("first").unwrap();
    assert_eq!(file.read().unwrap(), "[WARN] first\n");
}

/// Verifies the unterminated line mode concatenates records.
#[test]
fn without_newline_concatenates_records() {
    let file = TempLogFile::new("raw.log").unwrap();
    let registry = quiet_registry();
    registry.fatal().subscribe(WriterSubscriber::with_line_mode(
        file.open_append().unwrap(),
        LineMode::WithoutNewline,
    ));

    registry.fatal().emit("a").unwrap();
    registry.fatal().emit("b").unwrap();
    assert_eq!(file.read().unwrap(), "[FATAL] a[FATAL] b");
}

/// Verifies a disabled channel leaves the file untouched.
#[test]
fn disabled_channel_writes_nothing() {
    let file = TempLogFile::new("quiet.log").unwrap();
    let registry = quiet_registry();
    {
        let mut debug = registry.debug();
        debug.subscribe(WriterSubscriber::new(file.open_append().unwrap()));
        debug.set_enabled(false);
    }

    registry.debug().emit("hidden").unwrap();
    assert_eq!(file.read().unwrap(), "");
}
