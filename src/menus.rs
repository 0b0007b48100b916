//! Menu and dialog definitions
//!
//! Feature-level content for the overlay core: the root menu, the tools
//! submenu, and the stock dialogs. Everything here is declarative — items
//! carry tagged actions, and the input router interprets them.

use crate::overlay::action::{Action, EditSubmit};
use crate::overlay::dialog::{DialogSpec, EditSpec};
use crate::overlay::menu::MenuItem;

/// The menus the application can open by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    Main,
    Tools,
}

/// Title and ordered items for a menu. Order is display order; the first
/// item takes initial focus.
pub fn build(id: MenuId) -> (String, Vec<MenuItem>) {
    match id {
        MenuId::Main => (
            "Main".to_string(),
            vec![
                MenuItem::new("Packet Detail", Action::ShowPacketDetail),
                MenuItem::new("Capture Stats", Action::ShowCaptureStats),
                MenuItem::new("Search Packets", Action::OpenDialog(Box::new(search_dialog()))),
                MenuItem::new("Tools", Action::OpenMenu(MenuId::Tools)),
                MenuItem::new("Help", Action::OpenDialog(Box::new(help_dialog()))),
                MenuItem::new("Close", Action::Pop),
            ],
        ),
        MenuId::Tools => (
            "Tools".to_string(),
            vec![
                MenuItem::new("Clear Packets", Action::ClearPackets),
                MenuItem::new("About", Action::OpenDialog(Box::new(about_dialog()))),
                MenuItem::new("Close", Action::Pop),
            ],
        ),
    }
}

/// Single-line search dialog; submitting jumps the packet list to the next
/// matching summary.
pub fn search_dialog() -> DialogSpec {
    let mut spec = DialogSpec::text(
        "search",
        "Jump to the next packet whose summary\nmatches the entered text.",
    )
    .with_title("Search");
    spec.edit = Some(EditSpec {
        prompt: "Pattern: ".to_string(),
        initial: String::new(),
        multiline: false,
        on_submit: Some(EditSubmit::SearchPackets),
    });
    spec.buttons = Some(vec![crate::overlay::Button::new("Cancel", Action::Pop)]);
    spec
}

pub fn help_dialog() -> DialogSpec {
    DialogSpec::text(
        "help",
        "q       quit, or close the top overlay\n\
         Enter   packet detail / activate focused item\n\
         Tab     cycle panes forward\n\
         S-Tab   cycle panes backward\n\
         Up/Down move selection (wraps)\n\
         m       open the main menu",
    )
    .with_title("Help")
}

pub fn about_dialog() -> DialogSpec {
    DialogSpec::text(
        "about",
        format!(
            "packetdeck v{}\nTerminal dashboard for live packet capture.",
            env!("CARGO_PKG_VERSION")
        ),
    )
    .with_title("About")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_ends_with_close() {
        let (title, items) = build(MenuId::Main);
        assert_eq!(title, "Main");
        assert_eq!(items.last().unwrap().action, Action::Pop);
    }

    #[test]
    fn test_tools_is_reachable_as_submenu() {
        let (_, items) = build(MenuId::Main);
        assert!(items
            .iter()
            .any(|i| i.action == Action::OpenMenu(MenuId::Tools)));
    }

    #[test]
    fn test_search_dialog_has_single_line_submit_field() {
        let spec = search_dialog();
        let edit = spec.edit.unwrap();
        assert!(!edit.multiline);
        assert_eq!(edit.on_submit, Some(EditSubmit::SearchPackets));
    }
}
