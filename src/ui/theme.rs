use crate::algorithms::CellRole;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub highlight: Color, // Yellow
    pub cell_bg: Color,
    pub range_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for selection
    highlight: Color::Rgb(249, 226, 175),
    cell_bg: Color::Rgb(69, 71, 90),
    range_bg: Color::Rgb(88, 91, 112),
};

impl Theme {
    /// Style for an array cell with the given role
    pub fn cell_style(&self, role: CellRole) -> Style {
        let bold = Modifier::BOLD;
        match role {
            CellRole::Idle => Style::default().bg(self.cell_bg).fg(self.fg),
            CellRole::InRange => Style::default().bg(self.range_bg).fg(self.fg),
            CellRole::Eliminated => Style::default().fg(self.comment),
            CellRole::Current => Style::default()
                .bg(self.secondary)
                .fg(Color::Black)
                .add_modifier(bold),
            CellRole::Found => Style::default()
                .bg(self.primary)
                .fg(Color::Black)
                .add_modifier(bold),
            CellRole::Compared => Style::default()
                .bg(self.highlight)
                .fg(Color::Black)
                .add_modifier(bold),
            CellRole::Swapped => Style::default()
                .bg(self.error)
                .fg(Color::Black)
                .add_modifier(bold),
            CellRole::Sorted => Style::default().bg(self.success).fg(Color::Black),
        }
    }

    pub fn border_style(&self, is_focused: bool) -> Style {
        if is_focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border_normal)
        }
    }
}
