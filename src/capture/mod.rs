//! Capture boundary
//!
//! The sniffer is an independent producer. It communicates with the UI only
//! by appending decoded packet records to the shared [`PacketBuffer`] and
//! signaling a redraw through a bounded channel; it never touches overlay,
//! focus, or display state.

pub mod sniffer;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// Default capacity of the capture notification channel.
pub const DEFAULT_CHANNEL_BUFFER: usize = 64;

/// One decoded packet as produced by the sniffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketRecord {
    /// Arrival time, recorded at decode.
    pub timestamp: DateTime<Utc>,
    /// Single-line summary shown in the packet list.
    pub summary: String,
    /// Decoded field lines for the detail pane.
    pub detail: Vec<String>,
    /// Unparsed source text.
    pub raw: String,
}

impl PacketRecord {
    pub fn new(summary: impl Into<String>, detail: Vec<String>, raw: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            summary: summary.into(),
            detail,
            raw: raw.into(),
        }
    }

    /// Lines for the detail dialog; falls back to the summary so a detail
    /// view is never empty.
    pub fn detail_lines(&self) -> Vec<String> {
        if self.detail.is_empty() {
            vec![self.summary.clone()]
        } else {
            self.detail.clone()
        }
    }
}

/// Notification from the capture producer to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// New packets were appended to the buffer; redraw.
    PacketsArrived,
    /// The capture source reached end of stream.
    SourceClosed,
    /// The capture source failed.
    SourceError(String),
}

pub type CaptureEventSender = mpsc::Sender<CaptureEvent>;
pub type CaptureEventReceiver = mpsc::Receiver<CaptureEvent>;

/// Create the bounded capture notification channel.
pub fn create_channel(buffer: usize) -> (CaptureEventSender, CaptureEventReceiver) {
    mpsc::channel(buffer)
}

/// Thread-safe rolling buffer of captured packets.
///
/// With a configured maximum, the oldest record is dropped when a new one
/// arrives at capacity; without one, the buffer grows unbounded.
pub struct PacketBuffer {
    packets: RwLock<VecDeque<PacketRecord>>,
    max_packets: Option<usize>,
    total_seen: AtomicU64,
    dropped: AtomicU64,
}

impl PacketBuffer {
    pub fn new(max_packets: Option<usize>) -> Self {
        Self {
            packets: RwLock::new(VecDeque::new()),
            max_packets,
            total_seen: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    /// Append a record, evicting the oldest when at the configured cap.
    pub fn push(&self, record: PacketRecord) {
        if let Ok(mut packets) = self.packets.write() {
            if let Some(max) = self.max_packets {
                while packets.len() >= max.max(1) {
                    packets.pop_front();
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                }
            }
            packets.push_back(record);
            self.total_seen.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn len(&self) -> usize {
        self.packets.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone of the record at `index`, if present.
    pub fn get(&self, index: usize) -> Option<PacketRecord> {
        self.packets
            .read()
            .ok()
            .and_then(|p| p.get(index).cloned())
    }

    /// Summary lines for the packet list pane.
    pub fn summaries(&self) -> Vec<String> {
        self.packets
            .read()
            .map(|p| p.iter().map(|r| r.summary.clone()).collect())
            .unwrap_or_default()
    }

    /// Index of the next record at or after `start` (wrapping) whose summary
    /// contains `needle`, case-insensitively.
    pub fn find_next(&self, start: usize, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        let packets = self.packets.read().ok()?;
        let n = packets.len();
        if n == 0 {
            return None;
        }
        (0..n)
            .map(|offset| (start + offset) % n)
            .find(|&idx| packets[idx].summary.to_lowercase().contains(&needle))
    }

    pub fn clear(&self) {
        if let Ok(mut packets) = self.packets.write() {
            packets.clear();
        }
    }

    /// Packets pushed since startup, including evicted ones.
    pub fn total_seen(&self) -> u64 {
        self.total_seen.load(Ordering::Relaxed)
    }

    /// Packets evicted from a full rolling buffer.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
