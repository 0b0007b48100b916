//! Session log file wired through tracing
//!
//! Every session gets its own timestamped file under the logs directory.
//! Formatted lines are mirrored into the in-memory [`LogBuffer`] so the UI
//! can surface recent events without touching the filesystem.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::buffer::{LogBuffer, LogEntry, LogLevel};

/// Location of the active session log.
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    pub path: PathBuf,
}

/// One log file per session, named after the start time.
fn session_log_path(logs_dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    logs_dir.join(format!("packetdeck-{stamp}.log"))
}

/// Tees formatted tracing output into the session file and the ring buffer.
struct TeeWriter {
    file: Arc<Mutex<File>>,
    buffer: Arc<LogBuffer>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(buf);
            let _ = file.flush();
        }
        if let Ok(text) = std::str::from_utf8(buf) {
            for line in text.lines() {
                if let Some(entry) = parse_log_line(line) {
                    self.buffer.push(entry);
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Parse one formatted line ("2026-08-29T10:00:00.000Z LEVEL target: message").
fn parse_log_line(line: &str) -> Option<LogEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // Locate the level token; tracing pads levels so scan word by word.
    let mut level = None;
    let mut rest = line;
    for (idx, token) in line.split_whitespace().enumerate() {
        // Never mistake the message body for a level token.
        if idx > 2 {
            break;
        }
        if let Some(parsed) = LogLevel::parse(token) {
            level = Some(parsed);
            let after = line.find(token).map(|p| p + token.len())?;
            rest = line[after..].trim_start();
            break;
        }
    }
    let level = level.unwrap_or(LogLevel::Info);

    // "target: message" when the fmt layer emits targets.
    let (target, message) = match rest.split_once(": ") {
        Some((head, tail)) if head.contains("::") || !head.contains(' ') => {
            (head.to_string(), tail.to_string())
        }
        _ => ("packetdeck".to_string(), rest.to_string()),
    };

    Some(LogEntry {
        timestamp: Utc::now(),
        level,
        target,
        message,
    })
}

struct TeeWriterMaker {
    file: Arc<Mutex<File>>,
    buffer: Arc<LogBuffer>,
}

impl<'a> MakeWriter<'a> for TeeWriterMaker {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            file: Arc::clone(&self.file),
            buffer: Arc::clone(&self.buffer),
        }
    }
}

/// Keeps the session file handle alive for the lifetime of the subscriber.
pub struct LoggingGuard {
    _file: Arc<Mutex<File>>,
}

/// Install the global tracing subscriber writing to a fresh session log.
pub fn init_file_logging(
    logs_dir: PathBuf,
    buffer: Arc<LogBuffer>,
) -> Result<(LogFileInfo, LoggingGuard)> {
    fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;

    let log_path = session_log_path(&logs_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    let file = Arc::new(Mutex::new(file));

    let writer = TeeWriterMaker {
        file: Arc::clone(&file),
        buffer,
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "packetdeck=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    let info = LogFileInfo {
        path: log_path,
    };

    Ok((info, LoggingGuard { _file: file }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_target() {
        let line = "2026-08-29T14:30:45.123456Z  INFO packetdeck::capture: Sniffer started";
        let entry = parse_log_line(line).unwrap();
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.target, "packetdeck::capture");
        assert_eq!(entry.message, "Sniffer started");
    }

    #[test]
    fn test_parse_line_without_target_colon() {
        let line = "2026-08-29T14:30:45.123456Z  WARN capture channel full";
        let entry = parse_log_line(line).unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.target, "packetdeck");
        assert_eq!(entry.message, "capture channel full");
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_log_line("   ").is_none());
    }

    #[test]
    fn test_session_log_path_shape() {
        let path = session_log_path(Path::new("/tmp/packetdeck/logs"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("packetdeck-"));
        assert!(name.ends_with(".log"));
    }
}
