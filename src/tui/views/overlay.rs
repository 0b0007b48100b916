//! Overlay window rendering
//!
//! Each stack entry is a fixed-size window centered over whatever is below
//! it. The area is cleared first so nested overlays visibly stack.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::overlay::{OverlayEntry, SurfaceKind};
use crate::tui::layout::centered_fixed;
use crate::tui::theme::theme;

pub fn render_entry(frame: &mut Frame, entry: &OverlayEntry) {
    let surface = &entry.surface;
    let area = centered_fixed(frame.size(), surface.width, surface.height);
    frame.render_widget(Clear, area);

    match &surface.kind {
        SurfaceKind::Menu {
            title,
            items,
            selected,
        } => render_menu(frame, area, title, items, *selected),
        SurfaceKind::Dialog {
            title,
            lines,
            list_selectable,
            selected,
            edit,
            buttons,
            focused_button,
        } => {
            let block = bordered_block(title.as_deref());
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let mut constraints = vec![Constraint::Min(0)];
            if edit.is_some() {
                constraints.push(Constraint::Length(1));
            }
            constraints.push(Constraint::Length(1));
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(inner);

            render_body(frame, rows[0], lines, *list_selectable, *selected);
            let mut row_idx = 1;
            if let Some(edit) = edit {
                let prompt = Line::from(vec![
                    Span::styled(edit.prompt.clone(), theme().input_style()),
                    Span::raw(edit.buffer.clone()),
                    Span::styled("_", theme().input_style()),
                ]);
                frame.render_widget(Paragraph::new(prompt), rows[row_idx]);
                row_idx += 1;
            }
            render_buttons(frame, rows[row_idx], buttons, *focused_button);
        }
    }
}

fn bordered_block(title: Option<&str>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme().border_overlay));
    match title {
        Some(title) => block.title(Span::styled(title.to_string(), theme().header_style())),
        None => block,
    }
}

fn render_menu(frame: &mut Frame, area: Rect, title: &str, items: &[crate::overlay::MenuItem], selected: usize) {
    let block = bordered_block(Some(title));
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(item.label.as_str()))
        .collect();
    let list = List::new(list_items)
        .block(block)
        .highlight_style(theme().selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_body(frame: &mut Frame, area: Rect, lines: &[String], selectable: bool, selected: usize) {
    if selectable && !lines.is_empty() {
        let items: Vec<ListItem> = lines.iter().map(|l| ListItem::new(l.as_str())).collect();
        let list = List::new(items)
            .highlight_style(theme().selected_style())
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(selected.min(lines.len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    } else {
        let text: Vec<Line> = lines.iter().map(|l| Line::raw(l.as_str())).collect();
        frame.render_widget(Paragraph::new(text), area);
    }
}

fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    buttons: &[crate::overlay::Button],
    focused: usize,
) {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (idx, button) in buttons.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let label = format!("[ {} ]", button.label);
        if idx == focused {
            spans.push(Span::styled(label, theme().selected_style()));
        } else {
            spans.push(Span::raw(label));
        }
    }
    let row = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(row, area);
}
