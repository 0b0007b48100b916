//! Pane focus tracking
//!
//! The main view is three stacked panes. While any overlay is open it holds
//! input focus; otherwise the tracked pane does. Pane cycling wraps in both
//! directions.

use crate::overlay::OverlayStack;

/// The three main panes, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Scrolling packet list.
    #[default]
    Packets,
    /// Decoded fields of the selected packet.
    Detail,
    /// Unparsed source text of the selected packet.
    Raw,
}

/// Where keyboard input currently goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The top overlay of a non-empty stack.
    Overlay,
    /// A main pane, with an empty overlay stack.
    Pane(Pane),
}

/// Tracks which main pane holds focus when no overlay is open.
#[derive(Debug, Default)]
pub struct FocusTracker {
    pane: Pane,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Resolve the current focus target. Overlays always win.
    pub fn target(&self, overlays: &OverlayStack) -> FocusTarget {
        if overlays.is_empty() {
            FocusTarget::Pane(self.pane)
        } else {
            FocusTarget::Overlay
        }
    }

    pub fn cycle_forward(&mut self) {
        self.pane = match self.pane {
            Pane::Packets => Pane::Detail,
            Pane::Detail => Pane::Raw,
            Pane::Raw => Pane::Packets,
        };
    }

    pub fn cycle_backward(&mut self) {
        self.pane = match self.pane {
            Pane::Packets => Pane::Raw,
            Pane::Detail => Pane::Packets,
            Pane::Raw => Pane::Detail,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{Action, DisplayRoot, EnterHandler, MenuItem, OverlayStack};

    #[test]
    fn test_cycle_forward_wraps() {
        let mut focus = FocusTracker::new();
        assert_eq!(focus.pane(), Pane::Packets);
        focus.cycle_forward();
        assert_eq!(focus.pane(), Pane::Detail);
        focus.cycle_forward();
        assert_eq!(focus.pane(), Pane::Raw);
        focus.cycle_forward();
        assert_eq!(focus.pane(), Pane::Packets);
    }

    #[test]
    fn test_cycle_backward_wraps() {
        let mut focus = FocusTracker::new();
        focus.cycle_backward();
        assert_eq!(focus.pane(), Pane::Raw);
        focus.cycle_backward();
        assert_eq!(focus.pane(), Pane::Detail);
    }

    #[test]
    fn test_overlay_grabs_focus() {
        let focus = FocusTracker::new();
        let mut overlays = OverlayStack::new();
        let mut root = DisplayRoot::Base;

        assert_eq!(focus.target(&overlays), FocusTarget::Pane(Pane::Packets));

        crate::overlay::open_menu(
            &mut overlays,
            &mut root,
            "Main",
            vec![MenuItem::new("Close", Action::Pop)],
            Action::None,
        )
        .unwrap();
        assert_eq!(focus.target(&overlays), FocusTarget::Overlay);
    }
}
