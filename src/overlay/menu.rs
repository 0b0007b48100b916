//! Menu builder
//!
//! Builds a titled, selectable list of actions and pushes it as an overlay.
//! The overlay's activation key resolves the focused row to its item's
//! action. Submenus are ordinary items whose action opens another menu —
//! nesting falls out of the overlay stack without special-casing depth.

use crate::overlay::action::{Action, EnterHandler};
use crate::overlay::dialog::DIALOG_H_PADDING;
use crate::overlay::stack::{DisplayRoot, OverlayStack};
use crate::overlay::surface::{Surface, SurfaceId, SurfaceKind};
use crate::overlay::UiError;

/// One selectable menu row. Order is display order; the first item holds
/// initial focus.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: Action,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Build a menu from ordered items and push it as an overlay.
pub fn open_menu(
    stack: &mut OverlayStack,
    root: &mut DisplayRoot,
    title: impl Into<String>,
    items: Vec<MenuItem>,
    on_close: Action,
) -> Result<SurfaceId, UiError> {
    if items.is_empty() {
        return Err(UiError::EmptyBody);
    }
    let title = title.into();

    let width = items
        .iter()
        .map(|i| i.label.chars().count())
        .max()
        .unwrap_or_default()
        .max(title.chars().count())
        + DIALOG_H_PADDING;
    let height = items.len() + 2;

    let surface = Surface::new(
        width as u16,
        height as u16,
        SurfaceKind::Menu {
            title: title.clone(),
            items,
            selected: 0,
        },
    );

    Ok(stack.push(
        root,
        title,
        surface,
        EnterHandler::FocusedMenuItem,
        on_close,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_geometry_and_focus() {
        let mut stack = OverlayStack::new();
        let mut root = DisplayRoot::Base;

        let items = vec![
            MenuItem::new("Capture Stats", Action::ShowCaptureStats),
            MenuItem::new("Close", Action::Pop),
        ];
        open_menu(&mut stack, &mut root, "Main", items, Action::None).unwrap();

        let surface = &stack.top().unwrap().surface;
        assert_eq!(surface.width, 18); // "Capture Stats" + 5
        assert_eq!(surface.height, 4); // 2 items + borders
        assert_eq!(surface.selected(), 0);
        assert_eq!(stack.top().unwrap().enter, EnterHandler::FocusedMenuItem);
    }

    #[test]
    fn test_empty_menu_rejected() {
        let mut stack = OverlayStack::new();
        let mut root = DisplayRoot::Base;
        assert_eq!(
            open_menu(&mut stack, &mut root, "Main", vec![], Action::None).unwrap_err(),
            UiError::EmptyBody
        );
        assert_eq!(root, DisplayRoot::Base);
    }

    #[test]
    fn test_title_sets_minimum_width() {
        let mut stack = OverlayStack::new();
        let mut root = DisplayRoot::Base;
        let items = vec![MenuItem::new("x", Action::Pop)];
        open_menu(&mut stack, &mut root, "A Long Menu Title", items, Action::None).unwrap();
        assert_eq!(stack.top().unwrap().surface.width, 22);
    }
}
