//! Theme module for centralized color and style definitions
//!
//! Semantic color constants shared across the views so the palette stays
//! consistent in one place.

use ratatui::style::{Color, Modifier, Style};

/// Application theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // === UI Elements ===
    /// Primary accent color (header, overlay titles)
    pub accent: Color,
    /// Text color for normal content
    pub text: Color,
    /// Text color for muted/secondary content
    pub text_muted: Color,
    /// Foreground for the selected row
    pub selected_fg: Color,
    /// Background for the selected row
    pub selected_bg: Color,

    // === Input ===
    /// Color for edit-field prompts
    pub input_prompt: Color,

    // === Status line ===
    /// Transient status message color
    pub status: Color,
    /// Capture error color
    pub error: Color,

    // === Borders ===
    /// Normal border color
    pub border: Color,
    /// Border of the pane holding keyboard focus
    pub border_focused: Color,
    /// Overlay window border color
    pub border_overlay: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            text: Color::White,
            text_muted: Color::DarkGray,
            selected_fg: Color::Black,
            selected_bg: Color::Green,

            input_prompt: Color::Magenta,

            status: Color::Yellow,
            error: Color::Red,

            border: Color::White,
            border_focused: Color::Cyan,
            border_overlay: Color::Green,
        }
    }

    // === Style Builders ===

    /// Style for the header bar and overlay titles
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for muted text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the selected menu item or packet row
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for edit-field prompts
    pub fn input_style(&self) -> Style {
        Style::default().fg(self.input_prompt)
    }

    /// Style for transient status messages
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status)
    }

    /// Border style for a pane, highlighted when it holds focus
    pub fn pane_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.selected_bg, Color::Green);
    }

    #[test]
    fn test_focused_border_differs() {
        let theme = Theme::dark();
        assert_ne!(
            theme.pane_border_style(true),
            theme.pane_border_style(false)
        );
    }

    #[test]
    fn test_global_theme() {
        assert_eq!(theme().input_prompt, Color::Magenta);
    }
}
