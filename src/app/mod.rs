//! Application controller
//!
//! Owns every piece of runtime state and runs the single-threaded event
//! loop. Input, capture notifications, and rendering all meet here; nothing
//! outside this module mutates [`UiState`].

pub mod focus;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::capture::{
    self, CaptureEvent, CaptureEventReceiver, PacketBuffer, DEFAULT_CHANNEL_BUFFER,
};
use crate::capture::sniffer::{self, SnifferHandle};
use crate::config::Config;
use crate::input;
use crate::logging::{self, LogFileInfo};
use crate::tui::{views, Tui};

pub use state::UiState;

/// The application: configuration, state, capture plumbing, and terminal.
pub struct App {
    config: Config,
    state: UiState,
    packets: Arc<PacketBuffer>,
    capture_rx: CaptureEventReceiver,
    sniffer: Option<SnifferHandle>,
    tui: Tui,
    log_file_info: Option<LogFileInfo>,
}

impl App {
    pub fn new(log_file_info: Option<LogFileInfo>) -> Result<Self> {
        let config = Config::load()?;

        match logging::cleanup_old_logs_with_retention(
            &crate::config::logs_dir(),
            config.log_retention_days,
        ) {
            Ok(count) if count > 0 => tracing::info!("Removed {} old log files", count),
            Ok(_) => {}
            Err(e) => tracing::warn!("Log cleanup failed: {:#}", e),
        }

        let packets = Arc::new(PacketBuffer::new(config.packet_buffer_limit));
        let (capture_tx, capture_rx) = capture::create_channel(DEFAULT_CHANNEL_BUFFER);

        // A failed capture start is not fatal: the dashboard still opens so
        // the user can read the error and fix their setup.
        let mut startup_error = None;
        let sniffer = match sniffer::start(&config, Arc::clone(&packets), capture_tx) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!("Capture startup failed: {:#}", e);
                startup_error = Some(format!("Capture failed to start: {e}"));
                None
            }
        };

        let tui = Tui::new()?;

        let mut state = UiState::new();
        state.status_message = startup_error;

        Ok(Self {
            config,
            state,
            packets,
            capture_rx,
            sniffer,
            tui,
            log_file_info,
        })
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        if let Some(info) = &self.log_file_info {
            tracing::info!("Session log: {}", info.path.display());
        }
        tracing::info!(
            "packetdeck started (capture: {})",
            self.config.capture_command
        );

        let result = self.event_loop().await;

        // Stop the capture subprocess before leaving the alternate screen
        if let Some(handle) = self.sniffer.take() {
            handle.shutdown();
        }

        self.tui.exit()?;
        result
    }

    /// Main event loop
    async fn event_loop(&mut self) -> Result<()> {
        let tick_rate = Duration::from_millis(16);

        self.state.needs_render = true;

        loop {
            if self.state.needs_render {
                self.render()?;
                self.state.needs_render = false;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => {
                        // Transient status clears on the next keypress
                        if self.state.status_message.is_some() {
                            self.state.status_message = None;
                        }
                        input::handle_key_event(&mut self.state, &self.packets, key)?;
                        self.state.needs_render = true;
                    }
                    Event::Paste(text) => {
                        input::handle_paste(&mut self.state, &self.packets, &text)?;
                        self.state.needs_render = true;
                    }
                    Event::Resize(_, _) => {
                        self.state.needs_render = true;
                    }
                    _ => {}
                }
            }

            if self.process_capture_events() {
                self.state.needs_render = true;
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Drain pending capture notifications. Returns true if any arrived.
    fn process_capture_events(&mut self) -> bool {
        let mut had_events = false;
        while let Ok(event) = self.capture_rx.try_recv() {
            match event {
                CaptureEvent::PacketsArrived => {
                    let count = self.packets.len();
                    if self.state.follow_tail && count > 0 {
                        self.state.packet_selected = count - 1;
                    }
                }
                CaptureEvent::SourceClosed => {
                    tracing::info!("Capture source closed");
                    self.state.status_message = Some("Capture ended.".to_string());
                }
                CaptureEvent::SourceError(message) => {
                    tracing::error!("Capture source error: {}", message);
                    self.state.status_message = Some(format!("Capture error: {message}"));
                }
            }
            had_events = true;
        }
        had_events
    }

    fn render(&mut self) -> Result<()> {
        let Self {
            tui,
            state,
            packets,
            ..
        } = self;
        tui.draw(|frame| views::render(frame, state, packets))
    }
}
