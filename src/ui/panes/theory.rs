//! Theory pane: description, procedure and complexity of an algorithm

use crate::algorithms::{theory::theory, Algorithm};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_theory_pane(frame: &mut Frame, area: Rect, algorithm: Algorithm) {
    let theory = theory(algorithm);
    let heading = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let text = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![Line::from(Span::styled(theory.summary, text)), Line::default()];

    if let Some(precondition) = theory.precondition {
        lines.push(Line::from(Span::styled(
            precondition,
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("How it works", heading)));
    for (n, step) in theory.procedure.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", n + 1), label),
            Span::styled(*step, text),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Complexity", heading)));
    for (name, value) in [
        ("Best:    ", theory.best_case),
        ("Average: ", theory.average_case),
        ("Worst:   ", theory.worst_case),
        ("Space:   ", theory.space),
    ] {
        lines.push(Line::from(vec![
            Span::styled(name, label),
            Span::styled(value, text),
        ]));
    }

    let block = Block::default()
        .title(format!(" {} Theory ", algorithm.title()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(false))
        .padding(Padding::new(1, 1, 0, 0));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
