//! Logging for packetdeck
//!
//! File-based tracing output with timestamped filenames, an in-memory ring
//! buffer of recent entries, and age-based retention of old log files.

mod buffer;
mod file_writer;
mod retention;

pub use buffer::{LogBuffer, LogEntry, LogLevel};
pub use file_writer::{init_file_logging, LogFileInfo, LoggingGuard};
pub use retention::{cleanup_old_logs, cleanup_old_logs_with_retention};
