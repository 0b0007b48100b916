//! Tagged UI actions
//!
//! Menu items, buttons, and handlers carry plain data actions instead of
//! closures. A small interpreter in the input router dispatches them, so no
//! overlay ever captures mutable state across its own lifetime.

use crate::menus::MenuId;
use crate::overlay::dialog::DialogSpec;

/// An effect a menu item, button, or handler requests from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Do nothing.
    None,
    /// Close the top overlay.
    Pop,
    /// Signal application termination.
    Quit,
    /// Open a named menu as a new overlay.
    OpenMenu(MenuId),
    /// Open a dialog built from the given spec.
    OpenDialog(Box<DialogSpec>),
    /// Open the detail dialog for the currently selected packet.
    ShowPacketDetail,
    /// Open the capture statistics dialog.
    ShowCaptureStats,
    /// Clear the packet buffer.
    ClearPackets,
}

impl Default for Action {
    fn default() -> Self {
        Action::None
    }
}

/// What the activation key does while an overlay holds focus.
#[derive(Debug, Clone, PartialEq)]
pub enum EnterHandler {
    /// Ignore the activation key.
    Noop,
    /// Run the action of the focused menu item.
    FocusedMenuItem,
    /// Run the action of the focused button in the button row.
    FocusedButton,
    /// Run a fixed action regardless of focus.
    Custom(Action),
}

/// Command bound to a text-entry field's submit.
///
/// Fires once with the trimmed field content when a line break appears in a
/// single-line field; the owning overlay is popped right after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSubmit {
    /// Jump the packet list to the next summary matching the entered text.
    SearchPackets,
}
