//! UI state
//!
//! The single value holding everything the UI thread mutates: the display
//! root, the overlay stack, focus, selections, and the quit/render flags.
//! Created at application start, owned by [`super::App`], mutated only
//! synchronously per event. The display root changes only through the
//! overlay stack's push and pop.

use crate::app::focus::FocusTracker;
use crate::overlay::{DisplayRoot, OverlayStack, UiError};

/// All mutable UI state, exclusively owned by the application controller.
pub struct UiState {
    /// The widget currently presented as the whole screen. The overlay
    /// stack is its sole writer.
    pub display_root: DisplayRoot,
    pub overlays: OverlayStack,
    pub focus: FocusTracker,
    /// Selected row in the packet list.
    pub packet_selected: usize,
    /// Keep the selection pinned to the newest packet as capture runs.
    pub follow_tail: bool,
    /// Scroll offset of the detail pane.
    pub detail_scroll: usize,
    /// Scroll offset of the raw pane.
    pub raw_scroll: usize,
    /// Most recent search pattern.
    pub last_search: Option<String>,
    /// Transient message shown in the footer; cleared on next keypress.
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            display_root: DisplayRoot::Base,
            overlays: OverlayStack::new(),
            focus: FocusTracker::new(),
            packet_selected: 0,
            follow_tail: true,
            detail_scroll: 0,
            raw_scroll: 0,
            last_search: None,
            status_message: None,
            should_quit: false,
            needs_render: true,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the top overlay's entry field, for feature modules that need
    /// to read it while their dialog is open.
    pub fn current_edit_text(&self) -> Result<String, UiError> {
        self.overlays.edit_text()
    }

    /// Select the next packet, wrapping. Re-arms tail following when the
    /// selection lands on the newest packet.
    pub fn select_next_packet(&mut self, count: usize) {
        if count == 0 {
            self.packet_selected = 0;
            return;
        }
        let current = self.packet_selected.min(count - 1);
        self.packet_selected = (current + 1) % count;
        self.follow_tail = self.packet_selected == count - 1;
        self.detail_scroll = 0;
        self.raw_scroll = 0;
    }

    /// Select the previous packet, wrapping.
    pub fn select_prev_packet(&mut self, count: usize) {
        if count == 0 {
            self.packet_selected = 0;
            return;
        }
        let current = self.packet_selected.min(count - 1);
        self.packet_selected = current.checked_sub(1).unwrap_or(count - 1);
        self.follow_tail = self.packet_selected == count - 1;
        self.detail_scroll = 0;
        self.raw_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::focus::Pane;

    #[test]
    fn test_default_state() {
        let state = UiState::default();
        assert_eq!(state.display_root, DisplayRoot::Base);
        assert!(state.overlays.is_empty());
        assert_eq!(state.focus.pane(), Pane::Packets);
        assert!(state.follow_tail);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_packet_selection_wraps() {
        let mut state = UiState::new();
        state.select_next_packet(3);
        assert_eq!(state.packet_selected, 1);
        state.select_next_packet(3);
        state.select_next_packet(3);
        assert_eq!(state.packet_selected, 0);

        state.select_prev_packet(3);
        assert_eq!(state.packet_selected, 2);
    }

    #[test]
    fn test_follow_tail_rearms_on_newest() {
        let mut state = UiState::new();
        state.packet_selected = 4;
        state.select_prev_packet(5);
        assert!(!state.follow_tail);
        state.select_next_packet(5);
        assert!(state.follow_tail);
    }

    #[test]
    fn test_selection_with_empty_list_resets() {
        let mut state = UiState::new();
        state.packet_selected = 7;
        state.select_next_packet(0);
        assert_eq!(state.packet_selected, 0);
    }

    #[test]
    fn test_current_edit_text_requires_overlay() {
        let state = UiState::new();
        assert_eq!(state.current_edit_text().unwrap_err(), UiError::EmptyStack);
    }
}
