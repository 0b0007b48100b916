//! Screen layout helpers
//!
//! Splits the screen into header, pane, and footer areas, and centers
//! fixed-size overlay windows.

use ratatui::prelude::*;

/// Header bar height (single line)
pub const HEADER_HEIGHT: u16 = 1;

/// Footer height (status line plus top border)
pub const FOOTER_HEIGHT: u16 = 2;

/// Areas of the base screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Packet list pane
    pub packets: Rect,
    /// Decoded detail pane
    pub detail: Rect,
    /// Raw bytes pane
    pub raw: Rect,
    pub footer: Rect,
}

/// Split the full terminal area into the fixed three-pane arrangement.
///
/// The packet list takes half the remaining height; detail and raw share
/// the rest.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        packets: panes[0],
        detail: panes[1],
        raw: panes[2],
        footer: rows[2],
    }
}

/// Center a fixed-size window inside `area`, clamping to fit.
pub fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_areas_cover_height() {
        let areas = screen_areas(Rect::new(0, 0, 80, 30));
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.footer.height, FOOTER_HEIGHT);
        let panes_total = areas.packets.height + areas.detail.height + areas.raw.height;
        assert_eq!(panes_total, 30 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_centered_fixed_centers() {
        let rect = centered_fixed(Rect::new(0, 0, 80, 24), 10, 6);
        assert_eq!(rect, Rect::new(35, 9, 10, 6));
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let rect = centered_fixed(Rect::new(0, 0, 8, 4), 20, 10);
        assert_eq!(rect, Rect::new(0, 0, 8, 4));
    }
}
