//! Modal overlay subsystem
//!
//! Overlays are modal surfaces (menus and dialogs) stacked above the main
//! three-pane view. The stack owns the record of what was displayed before
//! each overlay opened and restores it on close; builders turn declarative
//! specs into sized surfaces and push them in one step.

pub mod action;
pub mod dialog;
pub mod menu;
pub mod stack;
pub mod surface;

pub use action::{Action, EditSubmit, EnterHandler};
pub use dialog::{open_dialog, DialogBody, DialogSpec, EditSpec, ListSurface};
pub use menu::{open_menu, MenuItem};
pub use stack::{DisplayRoot, OverlayEntry, OverlayStack};
pub use surface::{Button, EditField, Surface, SurfaceId, SurfaceKind};

use thiserror::Error;

/// Contract violations between feature modules and the overlay core.
///
/// These are programming errors in the calling feature, reported immediately
/// and never user-visible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    /// Pop or edit-text query attempted with no overlay open.
    #[error("no overlay is open")]
    EmptyStack,
    /// Dialog or menu built with zero content lines.
    #[error("surface built with zero content lines")]
    EmptyBody,
    /// Edit text queried when the top overlay has no text field.
    #[error("top overlay has no text field")]
    NoActiveTextField,
}
