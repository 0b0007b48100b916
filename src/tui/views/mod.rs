//! View rendering
//!
//! Pure functions from state to widgets. The base frame is drawn first,
//! then every active overlay bottom to top so the stack visibly nests.

mod overlay;
mod panes;

use ratatui::prelude::*;

use crate::app::state::UiState;
use crate::capture::PacketBuffer;

/// Render the whole screen for one frame.
pub fn render(frame: &mut Frame, ui: &UiState, packets: &PacketBuffer) {
    panes::render_base(frame, ui, packets);
    for entry in ui.overlays.iter() {
        overlay::render_entry(frame, entry);
    }
}
