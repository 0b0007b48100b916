//! Composed overlay surfaces
//!
//! A `Surface` is the sized, composed widget for one overlay. The core keeps
//! it as data: the renderer draws it, the router queries it for focus and
//! navigability. Whether a surface can be navigated with Up/Down is an
//! explicit capability (`navigable_len`) rather than a caught error —
//! overlays are heterogeneous, and a plain text dialog simply has nothing to
//! navigate.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::overlay::action::{Action, EditSubmit};
use crate::overlay::menu::MenuItem;

/// Process-local identifier for a surface, used by [`super::DisplayRoot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SurfaceId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// One button in a dialog's button row.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// A live text-entry field belonging to a dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct EditField {
    /// Caption rendered before the entry text.
    pub prompt: String,
    /// Current content.
    pub buffer: String,
    /// Multiline fields take line breaks literally and never auto-submit.
    pub multiline: bool,
    /// Command fired on submit (single-line fields only).
    pub on_submit: Option<EditSubmit>,
}

/// The composed visual content of an overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceKind {
    /// A titled, vertically listed, selectable menu.
    Menu {
        title: String,
        items: Vec<MenuItem>,
        selected: usize,
    },
    /// A dialog: body lines, optional entry field, button row.
    Dialog {
        title: Option<String>,
        lines: Vec<String>,
        /// Body came from a prebuilt selectable list and can be navigated.
        list_selectable: bool,
        selected: usize,
        edit: Option<EditField>,
        buttons: Vec<Button>,
        focused_button: usize,
    },
}

/// A sized overlay surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    id: SurfaceId,
    pub width: u16,
    pub height: u16,
    pub kind: SurfaceKind,
}

impl Surface {
    pub fn new(width: u16, height: u16, kind: SurfaceKind) -> Self {
        Self {
            id: SurfaceId::next(),
            width,
            height,
            kind,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Number of navigable rows, or `None` for surfaces that cannot be
    /// navigated (plain text dialogs).
    pub fn navigable_len(&self) -> Option<usize> {
        match &self.kind {
            SurfaceKind::Menu { items, .. } if !items.is_empty() => Some(items.len()),
            SurfaceKind::Dialog {
                lines,
                list_selectable: true,
                ..
            } if !lines.is_empty() => Some(lines.len()),
            _ => None,
        }
    }

    /// Current navigable selection.
    pub fn selected(&self) -> usize {
        match &self.kind {
            SurfaceKind::Menu { selected, .. } => *selected,
            SurfaceKind::Dialog { selected, .. } => *selected,
        }
    }

    /// Move the selection by `delta`, wrapping modulo the row count.
    ///
    /// Returns false (and changes nothing) when the surface is not navigable.
    pub fn move_selection(&mut self, delta: i64) -> bool {
        let Some(len) = self.navigable_len() else {
            return false;
        };
        let slot = match &mut self.kind {
            SurfaceKind::Menu { selected, .. } => selected,
            SurfaceKind::Dialog { selected, .. } => selected,
        };
        *slot = (*slot as i64 + delta).rem_euclid(len as i64) as usize;
        true
    }

    pub fn edit(&self) -> Option<&EditField> {
        match &self.kind {
            SurfaceKind::Dialog { edit, .. } => edit.as_ref(),
            SurfaceKind::Menu { .. } => None,
        }
    }

    pub fn edit_mut(&mut self) -> Option<&mut EditField> {
        match &mut self.kind {
            SurfaceKind::Dialog { edit, .. } => edit.as_mut(),
            SurfaceKind::Menu { .. } => None,
        }
    }

    /// Move button-row focus by `delta`, wrapping. No-op without buttons.
    pub fn cycle_button(&mut self, delta: i64) {
        if let SurfaceKind::Dialog {
            buttons,
            focused_button,
            ..
        } = &mut self.kind
        {
            if !buttons.is_empty() {
                *focused_button =
                    (*focused_button as i64 + delta).rem_euclid(buttons.len() as i64) as usize;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_surface(n: usize) -> Surface {
        let items = (0..n)
            .map(|i| MenuItem::new(format!("item {i}"), Action::None))
            .collect();
        Surface::new(
            10,
            5,
            SurfaceKind::Menu {
                title: "Test".to_string(),
                items,
                selected: 0,
            },
        )
    }

    fn text_dialog_surface() -> Surface {
        Surface::new(
            10,
            6,
            SurfaceKind::Dialog {
                title: None,
                lines: vec!["a".to_string(), "b".to_string()],
                list_selectable: false,
                selected: 0,
                edit: None,
                buttons: vec![Button::new("Ok", Action::Pop)],
                focused_button: 0,
            },
        )
    }

    #[test]
    fn test_surface_ids_are_unique() {
        let a = menu_surface(1);
        let b = menu_surface(1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_menu_is_navigable() {
        assert_eq!(menu_surface(4).navigable_len(), Some(4));
    }

    #[test]
    fn test_text_dialog_is_not_navigable() {
        let mut surface = text_dialog_surface();
        assert_eq!(surface.navigable_len(), None);
        assert!(!surface.move_selection(1));
        assert_eq!(surface.selected(), 0);
    }

    #[test]
    fn test_selection_wraps_both_directions() {
        let mut surface = menu_surface(3);
        assert!(surface.move_selection(-1));
        assert_eq!(surface.selected(), 2);
        assert!(surface.move_selection(1));
        assert_eq!(surface.selected(), 0);
    }

    #[test]
    fn test_button_cycle_wraps() {
        let mut surface = text_dialog_surface();
        if let SurfaceKind::Dialog { buttons, .. } = &mut surface.kind {
            buttons.push(Button::new("Cancel", Action::Pop));
        }
        surface.cycle_button(-1);
        if let SurfaceKind::Dialog { focused_button, .. } = surface.kind {
            assert_eq!(focused_button, 1);
        } else {
            unreachable!();
        }
    }
}
