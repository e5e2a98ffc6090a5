#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Shared test utilities for the chanlog workspace.
//!
//! The subscribers here record what a channel delivered so tests can assert
//! on delivery, ordering and failure handling without touching the console.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logging::{ChannelRegistry, Level, LogConfig, Record, Subscriber};
use tempfile::TempDir;

/// Builds a registry without the default console subscriber.
///
/// DEBUG starts enabled so every channel accepts messages.
#[must_use]
pub fn quiet_registry() -> ChannelRegistry {
    ChannelRegistry::with_config(
        LogConfig::default()
            .with_console(None)
            .with_debug_enabled(true),
    )
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One record as seen by a [`RecordingSubscriber`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Channel the record was emitted on.
    pub level: Level,
    /// Message text without the label prefix.
    pub message: String,
    /// Fully rendered line.
    pub line: String,
}

/// Subscriber that keeps every record it receives.
///
/// Clones share one buffer, so a test keeps a clone and registers another.
#[derive(Clone, Debug, Default)]
pub struct RecordingSubscriber {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl RecordingSubscriber {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        lock(&self.records).clone()
    }

    /// Returns the rendered lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        lock(&self.records)
            .iter()
            .map(|record| record.line.clone())
            .collect()
    }

    /// Returns how many records were received.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    /// Returns `true` when nothing was received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.records).is_empty()
    }

    /// Removes and returns every record received so far.
    pub fn drain(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *lock(&self.records))
    }
}

impl Subscriber for RecordingSubscriber {
    fn on_record(&self, record: &Record<'_>) -> io::Result<()> {
        lock(&self.records).push(CapturedRecord {
            level: record.level(),
            message: record.message().to_owned(),
            line: record.line().to_owned(),
        });
        Ok(())
    }
}

/// Subscriber that only counts deliveries.
#[derive(Clone, Debug, Default)]
pub struct CountingSubscriber {
    count: Arc<AtomicUsize>,
}

impl CountingSubscriber {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of deliveries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Subscriber for CountingSubscriber {
    fn on_record(&self, _record: &Record<'_>) -> io::Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Subscriber that fails every delivery with a fixed error kind.
#[derive(Clone, Debug)]
pub struct FailingSubscriber {
    kind: io::ErrorKind,
    attempts: Arc<AtomicUsize>,
}

impl FailingSubscriber {
    /// Creates a subscriber failing with `kind`.
    #[must_use]
    pub fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns how many deliveries were attempted.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Subscriber for FailingSubscriber {
    fn on_record(&self, record: &Record<'_>) -> io::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(
            self.kind,
            format!("rejected {}", record.line()),
        ))
    }
}

/// Shared log of which tagged subscriber ran, in invocation order.
#[derive(Clone, Debug, Default)]
pub struct OrderLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl OrderLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a subscriber that appends `tag` on every delivery.
    #[must_use]
    pub fn tagged(&self, tag: &'static str) -> TaggedSubscriber {
        TaggedSubscriber {
            tag,
            log: self.clone(),
        }
    }

    /// Returns the tags recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<&'static str> {
        lock(&self.entries).clone()
    }
}

/// Subscriber produced by [`OrderLog::tagged`].
#[derive(Clone, Debug)]
pub struct TaggedSubscriber {
    tag: &'static str,
    log: OrderLog,
}

impl Subscriber for TaggedSubscriber {
    fn on_record(&self, _record: &Record<'_>) -> io::Result<()> {
        lock(&self.log.entries).push(self.tag);
        Ok(())
    }
}

/// A log file inside a temporary directory removed on drop.
#[derive(Debug)]
pub struct TempLogFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TempLogFile {
    /// Creates a temporary directory holding a not yet existing `name`.
    pub fn new(name: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(name);
        Ok(Self { _dir: dir, path })
    }

    /// Returns the file's path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file for appending, creating it if needed.
    pub fn open_append(&self) -> io::Result<fs::File> {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
    }

    /// Reads the whole file as UTF-8.
    pub fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}
