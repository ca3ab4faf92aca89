//! Explanation pane for the current step

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_explanation_pane(frame: &mut Frame, area: Rect, explanation: &str, done: bool) {
    let style = if done {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let block = Block::default()
        .title(" Explanation ")
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(false))
        .padding(Padding::new(1, 1, 0, 0));

    let paragraph = Paragraph::new(explanation.to_string())
        .style(style)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
