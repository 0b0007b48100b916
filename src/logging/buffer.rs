//! In-memory ring of recent log entries
//!
//! Thread-safe because the tracing writer runs wherever the emitting task
//! does, while the UI thread reads it for display.

use std::collections::VecDeque;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

/// Log level for display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Parse a level token as it appears in formatted tracing output.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "TRACE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            target: target.into(),
            message: message.into(),
        }
    }
}

/// Capped ring buffer of recent log entries.
pub struct LogBuffer {
    entries: RwLock<VecDeque<LogEntry>>,
    max_entries: usize,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_entries.min(1024))),
            max_entries,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.write() {
            while entries.len() >= self.max_entries.max(1) {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|e| e.iter().rev().take(count).rev().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_caps_at_max() {
        let buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(LogEntry::new(LogLevel::Info, "test", format!("msg {i}")));
        }
        assert_eq!(buffer.len(), 3);
        let recent = buffer.recent(10);
        assert_eq!(recent.first().unwrap().message, "msg 2");
        assert_eq!(recent.last().unwrap().message, "msg 4");
    }

    #[test]
    fn test_recent_returns_oldest_first() {
        let buffer = LogBuffer::new(10);
        buffer.push(LogEntry::new(LogLevel::Info, "t", "first"));
        buffer.push(LogEntry::new(LogLevel::Warn, "t", "second"));
        let recent = buffer.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "second");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("warn"), None);
        assert_eq!(LogLevel::parse("INFO").map(|l| l.as_str()), Some("INFO"));
    }
}
