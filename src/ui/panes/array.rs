//! Array visualization pane
//!
//! Draws the array of the current step as a row of colored cells with the
//! slot index underneath and an optional marker (L/M/H, ^) below that. Rows
//! wrap when the array is wider than the pane.

use crate::algorithms::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// One array slot, pre-formatted
struct Cell {
    value: String,
    index: String,
    marker: String,
    style: Style,
    width: usize,
}

fn build_cells(step: &dyn Step) -> Vec<Cell> {
    step.array()
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let value = value.to_string();
            let index = i.to_string();
            let marker = step.marker(i).unwrap_or_default();
            let width = value.len().max(index.len()).max(marker.len()) + 2;
            Cell {
                value,
                index,
                marker,
                style: DEFAULT_THEME.cell_style(step.cell_role(i)),
                width,
            }
        })
        .collect()
}

fn push_row(lines: &mut Vec<Line<'static>>, row: &[&Cell]) {
    if !lines.is_empty() {
        lines.push(Line::default());
    }

    let mut values = Vec::new();
    let mut indices = Vec::new();
    let mut markers = Vec::new();
    for (n, cell) in row.iter().enumerate() {
        if n > 0 {
            values.push(Span::raw(" "));
            indices.push(Span::raw(" "));
            markers.push(Span::raw(" "));
        }
        let width = cell.width;
        values.push(Span::styled(format!("{:^width$}", cell.value), cell.style));
        indices.push(Span::styled(
            format!("{:^width$}", cell.index),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        markers.push(Span::styled(
            format!("{:^width$}", cell.marker),
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD),
        ));
    }

    lines.push(Line::from(values));
    lines.push(Line::from(indices));
    lines.push(Line::from(markers));
}

/// Lay out the cells of `step` in rows no wider than `max_width`
pub(crate) fn array_lines(step: &dyn Step, max_width: usize) -> Vec<Line<'static>> {
    let cells = build_cells(step);
    let mut lines = Vec::new();
    let mut row: Vec<&Cell> = Vec::new();
    let mut row_width = 0;

    for cell in &cells {
        let gap = usize::from(!row.is_empty());
        if !row.is_empty() && row_width + gap + cell.width > max_width {
            push_row(&mut lines, &row);
            row.clear();
            row_width = 0;
        }
        row_width += usize::from(!row.is_empty()) + cell.width;
        row.push(cell);
    }
    if !row.is_empty() {
        push_row(&mut lines, &row);
    }

    lines
}

/// Render the visualization pane for `step`
pub fn render_array_pane(frame: &mut Frame, area: Rect, title: &str, step: &dyn Step) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border_style(true))
        .padding(Padding::new(1, 1, 0, 0));

    // Borders plus horizontal padding
    let inner_width = area.width.saturating_sub(4).max(1) as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            step.caption(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(array_lines(step, inner_width));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{binary, linear};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_single_row_has_values_indices_and_markers() {
        let steps = linear::build(&[4.0, 12.0], 12.0);
        let lines = array_lines(&steps[1], 80);

        assert_eq!(lines.len(), 3);
        // "12" sets the second cell to 4 columns
        assert_eq!(text(&lines[0]), " 4   12 ");
        assert_eq!(text(&lines[1]), " 0   1  ");
        assert_eq!(text(&lines[2]), "     ^  ");
    }

    #[test]
    fn test_rows_wrap_to_the_pane_width() {
        let steps = binary::build(&[1.0, 2.0, 3.0, 4.0, 5.0], 5.0);
        // every cell is 3 wide, so two fit in 7 columns
        let lines = array_lines(&steps[0], 7);

        // three rows of three lines, separated by blank lines
        assert_eq!(lines.len(), 11);
        assert_eq!(text(&lines[0]), " 1   2 ");
        assert!(lines[3].spans.is_empty());
        assert_eq!(text(&lines[8]), " 5 ");
        assert_eq!(text(&lines[10]), " H ");
    }
}
