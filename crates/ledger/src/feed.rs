//! Bounded terminal feed
//!
//! The session's in-domain log: an append-only window over the most recent
//! entries. Distinct from process logging (`log::`), which the console
//! crate handles.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries retained by the feed.
pub const MAX_LOG_ENTRIES: usize = 50;

/// Severity channel of a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Info,
    Warn,
    Success,
    Cmd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
    /// Wall-clock HH:MM:SS stamp supplied by the caller.
    pub timestamp: String,
}

/// Sliding window over the last [`MAX_LOG_ENTRIES`] feed entries,
/// insertion order preserved.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    /// Append an entry, evicting the oldest once the window is full.
    pub fn push(&mut self, message: impl Into<String>, kind: LogKind, timestamp: impl Into<String>) {
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            message: message.into(),
            kind,
            timestamp: timestamp.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn push_n(buf: &mut LogBuffer, n: usize) {
        for i in 0..n {
            buf.push(format!("event {i}"), LogKind::Info, "00:00:00");
        }
    }

    #[test]
    fn test_feed_keeps_last_fifty_in_order() {
        let mut buf = LogBuffer::new();
        push_n(&mut buf, 60);

        assert_eq!(buf.len(), MAX_LOG_ENTRIES);
        let messages: Vec<&str> = buf.iter().map(|e| e.message.as_str()).collect();
        let expected: Vec<String> = (10..60).map(|i| format!("event {i}")).collect();
        assert_eq!(messages, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_feed_below_capacity_keeps_everything() {
        let mut buf = LogBuffer::new();
        push_n(&mut buf, 7);
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.latest().unwrap().message, "event 6");
    }

    #[test]
    fn test_feed_records_kind_and_timestamp() {
        let mut buf = LogBuffer::new();
        buf.push("Wallet Disconnected", LogKind::Warn, "14:03:22");
        let entry = buf.latest().unwrap();
        assert_eq!(entry.kind, LogKind::Warn);
        assert_eq!(entry.timestamp, "14:03:22");
    }

    proptest! {
        #[test]
        fn prop_feed_never_exceeds_capacity(n in 0usize..200) {
            let mut buf = LogBuffer::new();
            push_n(&mut buf, n);
            prop_assert!(buf.len() <= MAX_LOG_ENTRIES);
            prop_assert_eq!(buf.len(), n.min(MAX_LOG_ENTRIES));

            if let Some(latest) = buf.latest() {
                prop_assert_eq!(latest.message.clone(), format!("event {}", n - 1));
            }
        }
    }
}
