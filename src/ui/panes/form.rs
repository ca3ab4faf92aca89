//! Input form pane for starting a simulation

use crate::ui::app::{FormField, InputForm};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const ARRAY_PLACEHOLDER: &str = "e.g. 2, 5, 8, 1, 9";
const TARGET_PLACEHOLDER: &str = "e.g. 8";
const SORTED_PLACEHOLDER: &str = "e.g. 1, 3, 5, 7, 9, 11, 13";

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let line = if value.is_empty() && !is_focused {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )];
        if is_focused {
            spans.push(Span::styled("█", Style::default().fg(DEFAULT_THEME.highlight)));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the input form for `form.algorithm`
pub fn render_form_pane(frame: &mut Frame, area: Rect, form: &InputForm) {
    let outer = Block::default()
        .title(format!(" {} Simulation ", form.algorithm.title()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(true))
        .padding(Padding::new(1, 1, 1, 0));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let array_placeholder = if form.algorithm.requires_sorted() {
        SORTED_PLACEHOLDER
    } else {
        ARRAY_PLACEHOLDER
    };
    render_field(
        frame,
        rows[0],
        "Enter array (comma separated)",
        &form.array,
        array_placeholder,
        form.focused == FormField::Array,
    );

    if form.algorithm.needs_target() {
        render_field(
            frame,
            rows[1],
            "Number to search",
            &form.target,
            TARGET_PLACEHOLDER,
            form.focused == FormField::Target,
        );
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        "Press Enter to start the simulation",
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    frame.render_widget(hint, rows[2]);

    if let Some(error) = &form.error {
        let message = Paragraph::new(error.as_str())
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(message, rows[3]);
    }
}
