//! Dialog builder
//!
//! Turns a [`DialogSpec`] into a sized, composed surface and pushes it onto
//! the overlay stack in one step. The spec is consumed; the resulting
//! [`super::OverlayEntry`] is what persists until the dialog is popped.

use crate::overlay::action::{Action, EditSubmit, EnterHandler};
use crate::overlay::stack::{DisplayRoot, OverlayStack};
use crate::overlay::surface::{Button, EditField, Surface, SurfaceId, SurfaceKind};
use crate::overlay::UiError;

/// Fixed horizontal padding added to the computed content width.
pub const DIALOG_H_PADDING: usize = 5;

/// A prebuilt list-of-lines surface, reusable as a dialog body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSurface {
    pub lines: Vec<String>,
    /// Selectable lists can be navigated with Up/Down inside the dialog.
    pub selectable: bool,
}

/// Dialog body content, normalized in a single step at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    /// Literal text, split on line breaks.
    Text(String),
    /// A previously built list surface, reused directly.
    List(ListSurface),
}

/// Options for a dialog's text-entry field.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSpec {
    /// Caption rendered before the entry text.
    pub prompt: String,
    /// Initial field content.
    pub initial: String,
    /// Multiline fields take line breaks literally and never auto-submit.
    pub multiline: bool,
    /// Command fired with the trimmed content when the operator presses
    /// Enter in a single-line field; the dialog is popped right after.
    pub on_submit: Option<EditSubmit>,
}

/// Everything needed to build one dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogSpec {
    /// Identifying label for diagnostics.
    pub name: String,
    pub title: Option<String>,
    pub body: DialogBody,
    pub edit: Option<EditSpec>,
    /// Button row; `None` synthesizes a single "Ok" button that pops.
    pub buttons: Option<Vec<Button>>,
    /// Activation-key handling; `None` means "activate the focused button".
    pub enter: Option<EnterHandler>,
    /// Runs exactly once after the dialog is popped.
    pub on_close: Action,
}

impl DialogSpec {
    /// Spec with a literal text body and all other fields defaulted.
    pub fn text(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            body: DialogBody::Text(body.into()),
            edit: None,
            buttons: None,
            enter: None,
            on_close: Action::None,
        }
    }

    /// Spec reusing a prebuilt list surface as the body.
    pub fn list(name: impl Into<String>, body: ListSurface) -> Self {
        Self {
            name: name.into(),
            title: None,
            body: DialogBody::List(body),
            edit: None,
            buttons: None,
            enter: None,
            on_close: Action::None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn normalize_body(body: DialogBody) -> Result<(Vec<String>, bool), UiError> {
    let (lines, selectable) = match body {
        DialogBody::Text(text) => (text.split('\n').map(str::to_string).collect(), false),
        DialogBody::List(list) => (list.lines, list.selectable),
    };
    if lines.is_empty() {
        // Width computation over an empty sequence is undefined; reject
        // instead of silently defaulting.
        return Err(UiError::EmptyBody);
    }
    Ok((lines, selectable))
}

/// Build the dialog described by `spec` and push it as an overlay.
pub fn open_dialog(
    stack: &mut OverlayStack,
    root: &mut DisplayRoot,
    spec: DialogSpec,
) -> Result<SurfaceId, UiError> {
    let (lines, list_selectable) = normalize_body(spec.body)?;

    let edit = spec.edit.map(|e| EditField {
        prompt: e.prompt,
        buffer: e.initial,
        multiline: e.multiline,
        on_submit: e.on_submit,
    });

    // Width: longest body line, title, and prompt+initial text all compete;
    // the fixed padding is added on top. Height: body lines plus title bar,
    // frame border, and button row, plus one row for the entry field.
    let mut width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or_default();
    if let Some(title) = &spec.title {
        width = width.max(title.chars().count());
    }
    let mut height = lines.len() + 3;
    if let Some(field) = &edit {
        height += 1;
        width = width.max(field.prompt.chars().count() + field.buffer.chars().count() + 1);
    }
    width += DIALOG_H_PADDING;

    let buttons = spec
        .buttons
        .unwrap_or_else(|| vec![Button::new("Ok", Action::Pop)]);
    let enter = spec.enter.unwrap_or(EnterHandler::FocusedButton);

    let surface = Surface::new(
        width as u16,
        height as u16,
        SurfaceKind::Dialog {
            title: spec.title,
            lines,
            list_selectable,
            selected: 0,
            edit,
            buttons,
            focused_button: 0,
        },
    );

    Ok(stack.push(root, spec.name, surface, enter, spec.on_close))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(spec: DialogSpec) -> Result<(OverlayStack, DisplayRoot, SurfaceId), UiError> {
        let mut stack = OverlayStack::new();
        let mut root = DisplayRoot::Base;
        let id = open_dialog(&mut stack, &mut root, spec)?;
        Ok((stack, root, id))
    }

    #[test]
    fn test_geometry_untitled() {
        let spec = DialogSpec::text("t", "a\nbb\nccc");
        let (stack, root, id) = open(spec).unwrap();

        let top = stack.top().unwrap();
        assert_eq!(top.surface.width, 8); // max(1, 2, 3) + 5
        assert_eq!(top.surface.height, 6); // 3 lines + 3
        assert_eq!(root, DisplayRoot::Overlay(id));
    }

    #[test]
    fn test_geometry_title_wins_width() {
        let spec = DialogSpec::text("t", "a\nbb\nccc").with_title("Title");
        let (stack, _, _) = open(spec).unwrap();
        assert_eq!(stack.top().unwrap().surface.width, 10); // max(3, 5) + 5
    }

    #[test]
    fn test_geometry_with_edit_field() {
        let mut spec = DialogSpec::text("t", "body");
        spec.edit = Some(EditSpec {
            prompt: "Say: ".to_string(),
            initial: "hi".to_string(),
            multiline: false,
            on_submit: None,
        });
        let (stack, _, _) = open(spec).unwrap();

        let surface = &stack.top().unwrap().surface;
        assert_eq!(surface.height, 5); // 1 line + 3 + 1 for the field
        assert_eq!(surface.width, 13); // max(4, 5 + 2 + 1) + 5
    }

    #[test]
    fn test_empty_list_body_rejected() {
        let spec = DialogSpec::list(
            "t",
            ListSurface {
                lines: vec![],
                selectable: false,
            },
        );
        let mut stack = OverlayStack::new();
        let mut root = DisplayRoot::Base;
        assert_eq!(
            open_dialog(&mut stack, &mut root, spec).unwrap_err(),
            UiError::EmptyBody
        );
        assert!(stack.is_empty());
        assert_eq!(root, DisplayRoot::Base);
    }

    #[test]
    fn test_empty_text_body_is_one_blank_line() {
        // Mirrors split semantics: "" splits to a single empty line, which
        // is a valid (if blank) body.
        let (stack, _, _) = open(DialogSpec::text("t", "")).unwrap();
        assert_eq!(stack.top().unwrap().surface.height, 4);
    }

    #[test]
    fn test_default_ok_button_pops() {
        let (stack, _, _) = open(DialogSpec::text("t", "hello")).unwrap();
        match &stack.top().unwrap().surface.kind {
            SurfaceKind::Dialog { buttons, .. } => {
                assert_eq!(buttons.len(), 1);
                assert_eq!(buttons[0].label, "Ok");
                assert_eq!(buttons[0].action, Action::Pop);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_prebuilt_selectable_list_is_navigable() {
        let spec = DialogSpec::list(
            "t",
            ListSurface {
                lines: vec!["one".to_string(), "two".to_string()],
                selectable: true,
            },
        );
        let (stack, _, _) = open(spec).unwrap();
        assert_eq!(stack.top().unwrap().surface.navigable_len(), Some(2));
    }
}
