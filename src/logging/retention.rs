//! Age-based cleanup of old session logs.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::Result;

pub const DEFAULT_RETENTION_DAYS: u64 = 7;

/// Delete session logs older than the default retention window.
///
/// Returns how many files were removed.
pub fn cleanup_old_logs(logs_dir: &Path) -> Result<usize> {
    cleanup_old_logs_with_retention(logs_dir, DEFAULT_RETENTION_DAYS)
}

/// Delete session logs older than `retention_days`.
pub fn cleanup_old_logs_with_retention(logs_dir: &Path, retention_days: u64) -> Result<usize> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let cutoff = SystemTime::now()
        .checked_sub(Duration::from_secs(retention_days * 24 * 60 * 60))
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let mut deleted = 0;
    for entry in fs::read_dir(logs_dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_session_log = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("packetdeck-") && n.ends_with(".log"))
            .unwrap_or(false);
        if !is_session_log {
            continue;
        }

        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                if modified < cutoff && fs::remove_file(&path).is_ok() {
                    deleted += 1;
                }
            }
        }
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(cleanup_old_logs(temp_dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_cleanup_missing_dir() {
        let missing = Path::new("/nonexistent/packetdeck/logs");
        assert_eq!(cleanup_old_logs(missing).unwrap(), 0);
    }

    #[test]
    fn test_cleanup_leaves_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let note = temp_dir.path().join("notes.txt");
        File::create(&note).unwrap().write_all(b"keep").unwrap();
        let foreign = temp_dir.path().join("sniffer-2026-01-01_00-00-00.log");
        File::create(&foreign).unwrap().write_all(b"keep").unwrap();

        assert_eq!(cleanup_old_logs(temp_dir.path()).unwrap(), 0);
        assert!(note.exists());
        assert!(foreign.exists());
    }

    #[test]
    fn test_cleanup_keeps_fresh_session_logs() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("packetdeck-2026-08-29_10-00-00.log");
        File::create(&log).unwrap().write_all(b"session").unwrap();

        assert_eq!(cleanup_old_logs(temp_dir.path()).unwrap(), 0);
        assert!(log.exists());
    }
}
