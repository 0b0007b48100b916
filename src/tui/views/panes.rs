//! Base application frame
//!
//! Header bar, the three capture panes, and the footer status line.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::focus::Pane;
use crate::app::state::UiState;
use crate::capture::PacketBuffer;
use crate::tui::layout::screen_areas;
use crate::tui::theme::theme;

pub fn render_base(frame: &mut Frame, ui: &UiState, packets: &PacketBuffer) {
    let areas = screen_areas(frame.size());
    let focused = ui.focus.pane();
    let overlay_open = !ui.overlays.is_empty();

    render_header(frame, areas.header);
    render_packet_list(
        frame,
        areas.packets,
        ui,
        packets,
        focused == Pane::Packets && !overlay_open,
    );
    render_detail(
        frame,
        areas.detail,
        ui,
        packets,
        focused == Pane::Detail && !overlay_open,
    );
    render_raw(
        frame,
        areas.raw,
        ui,
        packets,
        focused == Pane::Raw && !overlay_open,
    );
    render_footer(frame, areas.footer, ui, packets);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = format!("packetdeck v{}", env!("CARGO_PKG_VERSION"));
    let header = Paragraph::new(Line::from(vec![
        Span::styled(title, theme().header_style()),
        Span::styled("  q quit | m menu | Tab pane", theme().muted_style()),
    ]));
    frame.render_widget(header, area);
}

fn render_packet_list(
    frame: &mut Frame,
    area: Rect,
    ui: &UiState,
    packets: &PacketBuffer,
    focused: bool,
) {
    let summaries = packets.summaries();
    let title = format!("Packets ({})", summaries.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme().pane_border_style(focused));

    if summaries.is_empty() {
        let empty = Paragraph::new("No packets yet.")
            .style(theme().muted_style())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = summaries.iter().map(|s| ListItem::new(s.as_str())).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme().selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(ui.packet_selected.min(summaries.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    ui: &UiState,
    packets: &PacketBuffer,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Detail")
        .border_style(theme().pane_border_style(focused));

    let lines = packets
        .get(ui.packet_selected)
        .map(|r| r.detail_lines())
        .unwrap_or_default();
    if lines.is_empty() {
        let empty = Paragraph::new("Select a packet to decode.")
            .style(theme().muted_style())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let text: Vec<Line> = lines.iter().map(|l| Line::raw(l.as_str())).collect();
    let scroll = ui.detail_scroll.min(lines.len().saturating_sub(1)) as u16;
    let paragraph = Paragraph::new(text).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_raw(frame: &mut Frame, area: Rect, ui: &UiState, packets: &PacketBuffer, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Raw")
        .border_style(theme().pane_border_style(focused));

    let raw = packets
        .get(ui.packet_selected)
        .map(|r| r.raw)
        .unwrap_or_default();
    if raw.is_empty() {
        let empty = Paragraph::new("").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let line_count = raw.lines().count();
    let scroll = ui.raw_scroll.min(line_count.saturating_sub(1)) as u16;
    let paragraph = Paragraph::new(raw).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, ui: &UiState, packets: &PacketBuffer) {
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match &ui.status_message {
        Some(message) => Line::styled(message.clone(), theme().status_style()),
        None => {
            let mut text = format!(
                "{} captured, {} in buffer",
                packets.total_seen(),
                packets.len()
            );
            let dropped = packets.dropped();
            if dropped > 0 {
                text.push_str(&format!(", {} dropped", dropped));
            }
            Line::styled(text, theme().muted_style())
        }
    };
    frame.render_widget(Paragraph::new(line), inner);
}
