//! Key dispatch and action interpretation
//!
//! The router is a small state machine over two axes: whether the overlay
//! stack is empty, and which pane or overlay holds focus. Overlays always
//! take input priority; the quit key pops before it terminates; directional
//! keys only move overlays that expose a navigable body.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::focus::{FocusTarget, Pane};
use crate::app::state::UiState;
use crate::capture::PacketBuffer;
use crate::menus;
use crate::overlay::action::{Action, EditSubmit, EnterHandler};
use crate::overlay::dialog::{self, DialogBody, DialogSpec, ListSurface};
use crate::overlay::menu;
use crate::overlay::stack::OverlayEntry;
use crate::overlay::surface::SurfaceKind;

/// Handle one key event.
pub fn handle_key_event(ui: &mut UiState, packets: &PacketBuffer, key: KeyEvent) -> Result<()> {
    // Only process key press events (not release/repeat)
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        ui.status_message = Some("Ctrl+C disabled. Press 'q' to quit.".to_string());
        return Ok(());
    }

    // A focused text-entry field grabs printable keys before anything else.
    if top_has_edit(ui) && handle_edit_key(ui, packets, key)? {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            // Quit with an overlay up just pops the overlay.
            if ui.overlays.is_empty() {
                ui.should_quit = true;
            } else {
                close_top(ui, packets)?;
            }
        }
        KeyCode::Esc => {
            if !ui.overlays.is_empty() {
                close_top(ui, packets)?;
            }
        }
        KeyCode::Enter => handle_enter(ui, packets)?,
        KeyCode::Tab => {
            // Pane cycling is reserved for the main panes.
            if ui.overlays.is_empty() {
                ui.focus.cycle_forward();
            }
        }
        KeyCode::BackTab => {
            if ui.overlays.is_empty() {
                ui.focus.cycle_backward();
            }
        }
        KeyCode::Down => handle_vertical(ui, packets, 1),
        KeyCode::Up => handle_vertical(ui, packets, -1),
        KeyCode::Left => {
            if let Some(top) = ui.overlays.top_mut() {
                top.surface.cycle_button(-1);
            }
        }
        KeyCode::Right => {
            if let Some(top) = ui.overlays.top_mut() {
                top.surface.cycle_button(1);
            }
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            if ui.overlays.is_empty() {
                dispatch(ui, packets, Action::OpenMenu(menus::MenuId::Main))?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Handle a bracketed-paste event. Paste feeds the focused text-entry field
/// and is otherwise ignored.
pub fn handle_paste(ui: &mut UiState, packets: &PacketBuffer, text: &str) -> Result<()> {
    if top_has_edit(ui) {
        edit_insert(ui, packets, text)?;
    }
    Ok(())
}

fn top_has_edit(ui: &UiState) -> bool {
    ui.overlays
        .top()
        .is_some_and(|entry| entry.surface.edit().is_some())
}

/// Keys consumed by the focused text-entry field. Returns false for keys the
/// field does not handle, which then fall through to normal routing.
fn handle_edit_key(ui: &mut UiState, packets: &PacketBuffer, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char(c) => {
            edit_insert(ui, packets, &c.to_string())?;
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(edit) = ui.overlays.top_mut().and_then(|e| e.surface.edit_mut()) {
                edit.buffer.pop();
            }
            Ok(true)
        }
        KeyCode::Enter => {
            let (multiline, has_submit) = match ui.overlays.top().and_then(|e| e.surface.edit()) {
                Some(edit) => (edit.multiline, edit.on_submit.is_some()),
                None => return Ok(false),
            };
            if multiline || has_submit {
                // The line break lands in the buffer; for a single-line
                // field the submit convention fires on it.
                edit_insert(ui, packets, "\n")?;
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Append text to the focused entry field and apply the single-shot submit
/// convention: a line break in a single-line field means Enter was pressed,
/// so the bound command runs with the trimmed content and the overlay pops.
fn edit_insert(ui: &mut UiState, packets: &PacketBuffer, text: &str) -> Result<()> {
    let mut submit = None;
    if let Some(edit) = ui.overlays.top_mut().and_then(|e| e.surface.edit_mut()) {
        edit.buffer.push_str(text);
        if !edit.multiline && edit.buffer.contains('\n') {
            if let Some(cmd) = edit.on_submit {
                submit = Some((cmd, edit.buffer.trim().to_string()));
            }
        }
    }
    if let Some((cmd, content)) = submit {
        run_submit(ui, packets, cmd, content)?;
        close_top(ui, packets)?;
    }
    Ok(())
}

fn handle_enter(ui: &mut UiState, packets: &PacketBuffer) -> Result<()> {
    match ui.focus.target(&ui.overlays) {
        FocusTarget::Overlay => {
            let action = match ui.overlays.top() {
                Some(top) => resolve_enter(top),
                None => Action::None,
            };
            dispatch(ui, packets, action)
        }
        FocusTarget::Pane(Pane::Packets) => dispatch(ui, packets, Action::ShowPacketDetail),
        FocusTarget::Pane(_) => Ok(()),
    }
}

/// Resolve the activation key against the top entry's enter handler.
fn resolve_enter(entry: &OverlayEntry) -> Action {
    match &entry.enter {
        EnterHandler::Noop => Action::None,
        EnterHandler::Custom(action) => action.clone(),
        EnterHandler::FocusedMenuItem => match &entry.surface.kind {
            SurfaceKind::Menu {
                items, selected, ..
            } => items
                .get(*selected)
                .map(|item| item.action.clone())
                .unwrap_or(Action::None),
            SurfaceKind::Dialog { .. } => Action::None,
        },
        EnterHandler::FocusedButton => match &entry.surface.kind {
            SurfaceKind::Dialog {
                buttons,
                focused_button,
                ..
            } => buttons
                .get(*focused_button)
                .map(|button| button.action.clone())
                .unwrap_or(Action::None),
            SurfaceKind::Menu { .. } => Action::None,
        },
    }
}

/// Directional movement: overlays first (wrap-around, silent no-op on
/// non-navigable surfaces), then the focused main pane.
fn handle_vertical(ui: &mut UiState, packets: &PacketBuffer, delta: i64) {
    if let Some(top) = ui.overlays.top_mut() {
        top.surface.move_selection(delta);
        return;
    }
    match ui.focus.pane() {
        Pane::Packets => {
            let count = packets.len();
            if delta > 0 {
                ui.select_next_packet(count);
            } else {
                ui.select_prev_packet(count);
            }
        }
        Pane::Detail => ui.detail_scroll = scrolled(ui.detail_scroll, delta),
        Pane::Raw => ui.raw_scroll = scrolled(ui.raw_scroll, delta),
    }
}

fn scrolled(offset: usize, delta: i64) -> usize {
    if delta > 0 {
        offset.saturating_add(1)
    } else {
        offset.saturating_sub(1)
    }
}

/// Pop the top overlay, then run its close action. The close action runs
/// after the display root has already been restored.
fn close_top(ui: &mut UiState, packets: &PacketBuffer) -> Result<()> {
    let entry = ui.overlays.pop(&mut ui.display_root)?;
    dispatch(ui, packets, entry.on_close)
}

/// Interpret one tagged action.
pub fn dispatch(ui: &mut UiState, packets: &PacketBuffer, action: Action) -> Result<()> {
    match action {
        Action::None => Ok(()),
        Action::Quit => {
            ui.should_quit = true;
            Ok(())
        }
        Action::Pop => close_top(ui, packets),
        Action::OpenMenu(id) => {
            let (title, items) = menus::build(id);
            menu::open_menu(
                &mut ui.overlays,
                &mut ui.display_root,
                title,
                items,
                Action::None,
            )?;
            Ok(())
        }
        Action::OpenDialog(spec) => {
            dialog::open_dialog(&mut ui.overlays, &mut ui.display_root, *spec)?;
            Ok(())
        }
        Action::ShowPacketDetail => show_packet_detail(ui, packets),
        Action::ShowCaptureStats => show_capture_stats(ui, packets),
        Action::ClearPackets => {
            packets.clear();
            ui.packet_selected = 0;
            ui.detail_scroll = 0;
            ui.raw_scroll = 0;
            ui.status_message = Some("Packet buffer cleared".to_string());
            Ok(())
        }
    }
}

fn show_packet_detail(ui: &mut UiState, packets: &PacketBuffer) -> Result<()> {
    let Some(record) = packets.get(ui.packet_selected) else {
        ui.status_message = Some("No packets captured yet".to_string());
        return Ok(());
    };
    let title: String = record.summary.chars().take(60).collect();
    let spec = DialogSpec {
        name: "packet-detail".to_string(),
        title: Some(title),
        body: DialogBody::List(ListSurface {
            lines: record.detail_lines(),
            selectable: true,
        }),
        edit: None,
        buttons: None,
        enter: None,
        on_close: Action::None,
    };
    dialog::open_dialog(&mut ui.overlays, &mut ui.display_root, spec)?;
    Ok(())
}

fn show_capture_stats(ui: &mut UiState, packets: &PacketBuffer) -> Result<()> {
    let body = format!(
        "Buffered: {}\nSeen since start: {}\nEvicted from buffer: {}",
        packets.len(),
        packets.total_seen(),
        packets.dropped(),
    );
    let spec = DialogSpec::text("capture-stats", body).with_title("Capture Stats");
    dialog::open_dialog(&mut ui.overlays, &mut ui.display_root, spec)?;
    Ok(())
}

fn run_submit(
    ui: &mut UiState,
    packets: &PacketBuffer,
    cmd: EditSubmit,
    text: String,
) -> Result<()> {
    match cmd {
        EditSubmit::SearchPackets => {
            if text.is_empty() {
                ui.status_message = Some("Search pattern is empty".to_string());
                return Ok(());
            }
            let start = ui
                .packet_selected
                .saturating_add(1)
                .checked_rem(packets.len().max(1))
                .unwrap_or(0);
            match packets.find_next(start, &text) {
                Some(index) => {
                    ui.packet_selected = index;
                    ui.follow_tail = false;
                    ui.status_message = Some(format!("Match at packet {}", index + 1));
                }
                None => {
                    ui.status_message = Some(format!("No match for '{text}'"));
                }
            }
            ui.last_search = Some(text);
            Ok(())
        }
    }
}
