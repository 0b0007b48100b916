//! Overlay stack
//!
//! Ordered stack of active modal surfaces. Each entry records the display
//! root that was current when it was pushed; pop restores it verbatim. The
//! stack is the sole writer of the `DisplayRoot` value, which is owned by
//! the controller's `UiState` and passed in by reference.

use crate::overlay::action::{Action, EnterHandler};
use crate::overlay::surface::{Surface, SurfaceId};
use crate::overlay::UiError;

/// The single widget currently presented as the whole screen.
///
/// `Base` is the three-pane application frame; otherwise the root names the
/// surface of the top-of-stack overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayRoot {
    #[default]
    Base,
    Overlay(SurfaceId),
}

/// One active modal surface plus the state needed to restore what it covers.
#[derive(Debug)]
pub struct OverlayEntry {
    /// Identifying label for diagnostics.
    pub name: String,
    pub surface: Surface,
    /// Display root recorded at push time, restored on pop.
    prior: DisplayRoot,
    /// Effect of the activation key while this overlay holds focus.
    pub enter: EnterHandler,
    /// Runs exactly once, after the surface has been detached on pop.
    pub on_close: Action,
}

impl OverlayEntry {
    pub fn prior(&self) -> DisplayRoot {
        self.prior
    }
}

/// Strictly LIFO stack of active overlays.
#[derive(Debug, Default)]
pub struct OverlayStack {
    entries: Vec<OverlayEntry>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a surface, recording the current display root and replacing it
    /// with the new surface. Always succeeds.
    pub fn push(
        &mut self,
        root: &mut DisplayRoot,
        name: String,
        surface: Surface,
        enter: EnterHandler,
        on_close: Action,
    ) -> SurfaceId {
        let id = surface.id();
        let prior = std::mem::replace(root, DisplayRoot::Overlay(id));
        tracing::debug!("overlay pushed: {} (depth {})", name, self.entries.len() + 1);
        self.entries.push(OverlayEntry {
            name,
            surface,
            prior,
            enter,
            on_close,
        });
        id
    }

    /// Pop the top overlay and restore the display root recorded at its
    /// push. The caller runs the returned entry's close action, which may
    /// assume the surface is no longer shown.
    pub fn pop(&mut self, root: &mut DisplayRoot) -> Result<OverlayEntry, UiError> {
        let entry = self.entries.pop().ok_or(UiError::EmptyStack)?;
        *root = entry.prior;
        tracing::debug!("overlay popped: {} (depth {})", entry.name, self.entries.len());
        Ok(entry)
    }

    pub fn top(&self) -> Option<&OverlayEntry> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut OverlayEntry> {
        self.entries.last_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries bottom to top, for rendering the visible stack.
    pub fn iter(&self) -> std::slice::Iter<'_, OverlayEntry> {
        self.entries.iter()
    }

    /// Content of the top overlay's text-entry field.
    pub fn edit_text(&self) -> Result<String, UiError> {
        let top = self.entries.last().ok_or(UiError::EmptyStack)?;
        top.surface
            .edit()
            .map(|e| e.buffer.clone())
            .ok_or(UiError::NoActiveTextField)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::menu::MenuItem;
    use crate::overlay::surface::SurfaceKind;

    fn surface(label: &str) -> Surface {
        Surface::new(
            10,
            4,
            SurfaceKind::Menu {
                title: label.to_string(),
                items: vec![MenuItem::new("Close", Action::Pop)],
                selected: 0,
            },
        )
    }

    #[test]
    fn test_push_sets_root_and_records_prior() {
        let mut root = DisplayRoot::Base;
        let mut stack = OverlayStack::new();

        let id = stack.push(
            &mut root,
            "a".to_string(),
            surface("a"),
            EnterHandler::FocusedMenuItem,
            Action::None,
        );
        assert_eq!(root, DisplayRoot::Overlay(id));
        assert_eq!(stack.top().map(|e| e.prior()), Some(DisplayRoot::Base));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_pop_restores_prior_root() {
        let mut root = DisplayRoot::Base;
        let mut stack = OverlayStack::new();

        let a = stack.push(
            &mut root,
            "a".to_string(),
            surface("a"),
            EnterHandler::Noop,
            Action::None,
        );
        stack.push(
            &mut root,
            "b".to_string(),
            surface("b"),
            EnterHandler::Noop,
            Action::None,
        );

        let popped = stack.pop(&mut root).unwrap();
        assert_eq!(popped.name, "b");
        assert_eq!(root, DisplayRoot::Overlay(a));

        stack.pop(&mut root).unwrap();
        assert_eq!(root, DisplayRoot::Base);
    }

    #[test]
    fn test_stack_discipline_under_arbitrary_depth() {
        let mut root = DisplayRoot::Base;
        let mut stack = OverlayStack::new();

        let mut roots_before_push = Vec::new();
        for depth in 0..8 {
            roots_before_push.push(root);
            stack.push(
                &mut root,
                format!("overlay-{depth}"),
                surface("x"),
                EnterHandler::Noop,
                Action::None,
            );
        }
        for expected in roots_before_push.into_iter().rev() {
            stack.pop(&mut root).unwrap();
            assert_eq!(root, expected);
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_on_empty_fails_without_mutation() {
        let mut root = DisplayRoot::Base;
        let mut stack = OverlayStack::new();

        assert_eq!(stack.pop(&mut root).unwrap_err(), UiError::EmptyStack);
        assert_eq!(root, DisplayRoot::Base);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_edit_text_errors() {
        let mut root = DisplayRoot::Base;
        let mut stack = OverlayStack::new();

        assert_eq!(stack.edit_text().unwrap_err(), UiError::EmptyStack);

        stack.push(
            &mut root,
            "menu".to_string(),
            surface("menu"),
            EnterHandler::FocusedMenuItem,
            Action::None,
        );
        assert_eq!(stack.edit_text().unwrap_err(), UiError::NoActiveTextField);
    }
}
