//! Shared helpers for unit tests

use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use crate::log::{Logger, LogEntry, LogSeverity};

/// Logger that captures every entry for later inspection
///
/// Only entries logged from the creating thread are kept, so tests running
/// in parallel do not leak lines into each other's capture.
pub struct CaptureLogger {
    thread: ThreadId,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { thread: thread::current().id(), entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if thread::current().id() == self.thread {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

/// Messages of the captured entries with the given severity
pub fn messages_with(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> Vec<String> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.severity == severity)
        .map(|entry| entry.message.clone())
        .collect()
}
