//! crates/logging/src/subscriber/list.rs
//! Ordered subscriber registrations and dispatch.

use std::fmt;
use std::sync::Arc;

use super::{Subscriber, SubscriberId};
use crate::error::EmitError;
use crate::record::Record;

struct Entry {
    id: SubscriberId,
    subscriber: Arc<dyn Subscriber>,
}

/// Ordered collection of subscribers attached to one channel.
///
/// Insertion order is call order. Registrations are not deduplicated: the same
/// subscriber added twice is called twice and owns two handles.
pub struct SubscriberList {
    next_id: u64,
    entries: Vec<Entry>,
}

impl SubscriberList {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Returns the number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether `id` is currently registered.
    #[must_use]
    pub fn contains(&self, id: SubscriberId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Iterates over the registered handles in call order.
    pub fn ids(&self) -> impl Iterator<Item = SubscriberId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    pub(crate) fn push(&mut self, subscriber: Arc<dyn Subscriber>) -> SubscriberId {
        let id = SubscriberId::from_raw(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, subscriber });
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriberId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn dispatch(&self, record: &Record<'_>) -> Result<(), EmitError> {
        for entry in &self.entries {
            entry
                .subscriber
                .on_record(record)
                .map_err(|source| EmitError::new(record.level(), entry.id, source))?;
        }
        Ok(())
    }
}

impl fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::subscriber::subscriber_fn;
    use logging_sink::format_line;
    use std::io;
    use std::sync::Mutex;

    fn tagging(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> Arc<dyn Subscriber> {
        let log = Arc::clone(log);
        Arc::new(subscriber_fn(move |_record: &Record<'_>| {
            log.lock().unwrap().push(tag);
            Ok(())
        }))
    }

    fn dispatch(list: &SubscriberList) -> Result<(), EmitError> {
        let line = format_line("INFO", format_args!("x"));
        list.dispatch(&Record::new(Level::Info, &line))
    }

    #[test]
    fn handles_are_sequential_and_unique() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        let a = list.push(tagging(&log, "a"));
        let b = list.push(tagging(&log, "b"));
        assert_ne!(a, b);
        assert_eq!(list.ids().collect::<Vec<_>>(), [a, b]);
    }

    #[test]
    fn removed_handles_are_not_reused() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        let a = list.push(tagging(&log, "a"));
        assert!(list.remove(a));
        let b = list.push(tagging(&log, "b"));
        assert_ne!(a, b);
        assert!(!list.remove(a));
        assert!(list.contains(b));
    }

    #[test]
    fn dispatch_runs_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        for tag in ["a", "b", "c"] {
            list.push(tagging(&log, tag));
        }
        dispatch(&list).unwrap();
        assert_eq!(*log.lock().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn same_subscriber_twice_fires_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let shared = tagging(&log, "dup");
        let mut list = SubscriberList::new();
        let first = list.push(Arc::clone(&shared));
        let second = list.push(shared);
        assert_ne!(first, second);

        dispatch(&list).unwrap();
        assert_eq!(*log.lock().unwrap(), ["dup", "dup"]);
    }

    #[test]
    fn dispatch_stops_at_first_failure() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        list.push(tagging(&log, "before"));
        let failing = list.push(Arc::new(subscriber_fn(|_record: &Record<'_>| {
            Err(io::Error::other("sink full"))
        })));
        list.push(tagging(&log, "after"));

        let err = dispatch(&list).unwrap_err();
        assert_eq!(err.subscriber(), failing);
        assert_eq!(err.level(), Level::Info);
        assert_eq!(*log.lock().unwrap(), ["before"]);
    }

    #[test]
    fn clear_removes_everything() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        list.push(tagging(&log, "a"));
        list.push(tagging(&log, "b"));
        list.clear();
        assert!(list.is_empty());
        dispatch(&list).unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn debug_lists_handles() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();
        list.push(tagging(&log, "a"));
        assert_eq!(format!("{list:?}"), "[SubscriberId(0)]");
    }
}
