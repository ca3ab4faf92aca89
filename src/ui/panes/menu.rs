//! Algorithm list pane

use crate::algorithms::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
    Frame,
};

/// Render the list of algorithms with `selected` highlighted
pub fn render_menu_pane(frame: &mut Frame, area: Rect, selected: usize) {
    let block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(true))
        .padding(Padding::new(1, 1, 1, 0));

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(n, algorithm)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}. ", n + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(algorithm.title(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
