//! Line-mode capture producer
//!
//! Drives a `tcpdump` subprocess in line-buffered verbose mode and groups
//! its output into packet records: a non-indented line starts a new packet,
//! indented lines continue the previous one. Runs entirely on its own task;
//! the UI hears about it only through the packet buffer and the
//! notification channel.

use std::process::Stdio;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::{CaptureEvent, CaptureEventSender, PacketBuffer, PacketRecord};
use crate::config::Config;

/// Handle to stop the running capture.
pub struct SnifferHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl SnifferHandle {
    /// Stop the capture subprocess. Safe to call once; dropping the handle
    /// without calling this also kills the child.
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Groups capture output lines into packet records.
///
/// tcpdump's verbose output puts the packet header on a non-indented line
/// and decoded fields on indented continuation lines.
#[derive(Debug, Default)]
struct LineAssembler {
    summary: Option<String>,
    detail: Vec<String>,
}

impl LineAssembler {
    /// Feed one output line; returns the previous record when `line` starts
    /// a new packet.
    fn feed(&mut self, line: String) -> Option<PacketRecord> {
        let continuation = line.starts_with(' ') || line.starts_with('\t');
        if continuation {
            if self.summary.is_some() {
                self.detail.push(line.trim().to_string());
            }
            return None;
        }
        let finished = self.flush();
        self.summary = Some(line);
        finished
    }

    /// Complete the in-flight record, if any.
    fn flush(&mut self) -> Option<PacketRecord> {
        let summary = self.summary.take()?;
        let detail = std::mem::take(&mut self.detail);
        let raw = if detail.is_empty() {
            summary.clone()
        } else {
            format!("{}\n{}", summary, detail.join("\n"))
        };
        Some(PacketRecord::new(summary, detail, raw))
    }
}

/// Spawn the capture subprocess and its reader task.
pub fn start(
    config: &Config,
    buffer: Arc<PacketBuffer>,
    events: CaptureEventSender,
) -> Result<SnifferHandle> {
    let mut cmd = Command::new(&config.capture_command);
    cmd.args(["-l", "-n", "-v"]);
    if let Some(interface) = &config.interface {
        cmd.args(["-i", interface]);
    }
    if let Some(filter) = &config.capture_filter {
        cmd.arg(filter);
    }
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let mut child = cmd.spawn().with_context(|| {
        format!(
            "failed to spawn capture command '{}'",
            config.capture_command
        )
    })?;
    let stdout = child
        .stdout
        .take()
        .context("capture command has no stdout")?;
    let stderr = child.stderr.take();

    info!(
        "Capture started: {} (interface: {}, filter: {})",
        config.capture_command,
        config.interface.as_deref().unwrap_or("default"),
        config.capture_filter.as_deref().unwrap_or("none"),
    );

    // tcpdump reports interface/permission problems on stderr.
    if let Some(stderr) = stderr {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                warn!("capture: {}", line);
            }
        });
    }

    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        let mut assembler = LineAssembler::default();

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    let _ = child.start_kill();
                    debug!("Capture reader shut down");
                    break;
                }
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if let Some(record) = assembler.feed(line) {
                            buffer.push(record);
                            // Coalescing notification; a full channel just
                            // means a redraw is already pending.
                            let _ = events.try_send(CaptureEvent::PacketsArrived);
                        }
                    }
                    Ok(None) => {
                        if let Some(record) = assembler.flush() {
                            buffer.push(record);
                        }
                        let _ = events.try_send(CaptureEvent::SourceClosed);
                        break;
                    }
                    Err(e) => {
                        let _ = events.try_send(CaptureEvent::SourceError(e.to_string()));
                        break;
                    }
                }
            }
        }
    });

    Ok(SnifferHandle {
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembler_groups_continuation_lines() {
        let mut assembler = LineAssembler::default();

        assert!(assembler
            .feed("12:00:01.1 IP (tos 0x0, ttl 64) A > B".to_string())
            .is_none());
        assert!(assembler.feed("    10.0.0.1.443 > 10.0.0.2.51000".to_string()).is_none());
        assert!(assembler.feed("\tFlags [S], seq 1".to_string()).is_none());

        let record = assembler
            .feed("12:00:01.2 IP (tos 0x0, ttl 64) C > D".to_string())
            .unwrap();
        assert_eq!(record.summary, "12:00:01.1 IP (tos 0x0, ttl 64) A > B");
        assert_eq!(
            record.detail,
            vec![
                "10.0.0.1.443 > 10.0.0.2.51000".to_string(),
                "Flags [S], seq 1".to_string()
            ]
        );
        assert!(record.raw.contains('\n'));
    }

    #[test]
    fn test_assembler_flush_completes_last_packet() {
        let mut assembler = LineAssembler::default();
        assembler.feed("12:00:01.1 ARP who-has 10.0.0.1".to_string());

        let record = assembler.flush().unwrap();
        assert_eq!(record.summary, "12:00:01.1 ARP who-has 10.0.0.1");
        assert!(record.detail.is_empty());
        assert_eq!(record.raw, record.summary);

        assert!(assembler.flush().is_none());
    }

    #[test]
    fn test_assembler_ignores_orphan_continuations() {
        let mut assembler = LineAssembler::default();
        assert!(assembler.feed("   stray continuation".to_string()).is_none());
        assert!(assembler.flush().is_none());
    }
}
