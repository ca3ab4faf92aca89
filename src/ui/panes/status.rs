//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `progress` is `(position, total)` while a simulation is open and `None`
/// on the other screens.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    progress: Option<(usize, usize)>,
    is_playing: bool,
    keybinds: &[(&str, &str)],
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let badge_style = |bg: Color| {
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    };
    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);

    // Left side: step info and status
    let mut left_spans = Vec::new();
    if let Some((position, total)) = progress {
        left_spans.push(Span::styled(
            format!(" Step {}/{} ", position + 1, total),
            badge_style(DEFAULT_THEME.primary),
        ));
        left_spans.push(Span::styled(" | ", bar_style.fg(DEFAULT_THEME.comment)));
    }
    left_spans.push(Span::styled(
        format!(" {} ", message),
        bar_style.fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (n, (key, desc)) in keybinds.iter().enumerate() {
        if n > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    // Show status indicators based on position and state
    if let Some((position, total)) = progress {
        let badge = if is_playing {
            Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
        } else if position + 1 >= total {
            Some((" END ", DEFAULT_THEME.error))
        } else if position == 0 {
            Some((" START ", DEFAULT_THEME.success))
        } else {
            None
        };

        if let Some((text, color)) = badge {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(text, badge_style(color)));
        }
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
