use hemikey::SessionView;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const BORDER_COLOR: Color = Color::Rgb(90, 170, 255);
const DIM_BORDER: Color = Color::Rgb(70, 100, 130);
const TEXT_COLOR: Color = Color::Rgb(210, 205, 200);
const HIGHLIGHT_COLOR: Color = Color::Rgb(255, 220, 100);

/// Longest suffix of `text` that fits in `max_cols` display columns.
pub(crate) fn tail_by_columns(text: &str, max_cols: usize) -> &str {
    if UnicodeWidthStr::width(text) <= max_cols {
        return text;
    }
    let mut used = 0usize;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_cols {
            break;
        }
        used += width;
        start = index;
    }
    &text[start..]
}

pub(crate) fn status_lines(view: &SessionView, controller_label: &str) -> Vec<String> {
    let controller = if view.controller_connected {
        format!("connected ({controller_label})")
    } else {
        format!("disconnected ({controller_label})")
    };
    vec![
        format!("Vertical: {:.2}°", view.vertical_deg),
        format!("Horizontal: {:.2}°", view.horizontal_deg),
        format!("Controller: {controller}"),
    ]
}

/// Active sector as a line of characters, or `Hemisphere` when none is active.
pub(crate) fn hemisphere_line(view: &SessionView) -> String {
    match (&view.active_sector, view.active_row) {
        (Some(sector), Some(row)) => {
            let cells: String = sector.iter().collect();
            format!("Sector {}: {cells}", row + 1)
        }
        _ => "Hemisphere".to_string(),
    }
}

/// Zoomed row cells; the cell under the cursor is highlighted by position.
fn zoomed_row(view: &SessionView) -> Line<'static> {
    let Some(sector) = &view.active_sector else {
        return Line::from(Span::styled(
            "(no sector active)",
            Style::default().fg(DIM_BORDER),
        ));
    };
    let spans: Vec<Span<'static>> = sector
        .iter()
        .enumerate()
        .map(|(index, ch)| {
            let cell = format!(" {ch} ");
            if index == view.column {
                Span::styled(
                    cell,
                    Style::default()
                        .fg(Color::Black)
                        .bg(HIGHLIGHT_COLOR)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(cell, Style::default().fg(TEXT_COLOR))
            }
        })
        .collect();
    Line::from(spans)
}

fn titled_block(title: &'static str, border: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title,
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
}

pub(crate) fn draw(frame: &mut Frame<'_>, view: &SessionView, controller_label: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(frame.size());

    let output_width = usize::from(chunks[0].width.saturating_sub(2));
    let output = Paragraph::new(tail_by_columns(&view.output, output_width).to_string())
        .block(titled_block(" Output ", BORDER_COLOR))
        .style(Style::default().fg(TEXT_COLOR));
    frame.render_widget(output, chunks[0]);

    let status: Vec<Line> = status_lines(view, controller_label)
        .into_iter()
        .map(Line::from)
        .collect();
    let status = Paragraph::new(Text::from(status))
        .block(titled_block(" Rotation ", DIM_BORDER))
        .style(Style::default().fg(TEXT_COLOR));
    frame.render_widget(status, chunks[1]);

    let hemisphere = Paragraph::new(hemisphere_line(view))
        .block(titled_block(" Hemisphere ", DIM_BORDER))
        .style(Style::default().fg(TEXT_COLOR));
    frame.render_widget(hemisphere, chunks[2]);

    let zoomed = Paragraph::new(zoomed_row(view)).block(
        titled_block(" Selection ", BORDER_COLOR).title_bottom(Line::from(vec![
            Span::styled(" arrows ", Style::default().fg(HIGHLIGHT_COLOR)),
            Span::styled("move  ", Style::default().fg(DIM_BORDER)),
            Span::styled("Enter ", Style::default().fg(HIGHLIGHT_COLOR)),
            Span::styled("commit  ", Style::default().fg(DIM_BORDER)),
            Span::styled("Backspace ", Style::default().fg(HIGHLIGHT_COLOR)),
            Span::styled("delete  ", Style::default().fg(DIM_BORDER)),
            Span::styled("Esc ", Style::default().fg(HIGHLIGHT_COLOR)),
            Span::styled("quit ", Style::default().fg(DIM_BORDER)),
        ])),
    );
    frame.render_widget(zoomed, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> SessionView {
        SessionView {
            output: "HI".to_string(),
            vertical_deg: 12.0,
            horizontal_deg: 340.456,
            controller_connected: false,
            highlighted: Some('G'),
            active_sector: Some("FGHIJ".chars().collect()),
            active_row: Some(1),
            column: 1,
        }
    }

    #[test]
    fn tail_keeps_the_most_recent_columns() {
        assert_eq!(tail_by_columns("HELLO", 10), "HELLO");
        assert_eq!(tail_by_columns("HELLO", 3), "LLO");
        assert_eq!(tail_by_columns("HELLO", 0), "");
        // Wide characters take two columns and are never split.
        assert_eq!(tail_by_columns("A漢字", 3), "字");
        assert_eq!(tail_by_columns("A漢字", 5), "A漢字");
    }

    #[test]
    fn status_formats_angles_to_two_decimals() {
        let lines = status_lines(&view(), "detached");
        assert_eq!(lines[0], "Vertical: 12.00°");
        assert_eq!(lines[1], "Horizontal: 340.46°");
        assert_eq!(lines[2], "Controller: disconnected (detached)");
    }

    #[test]
    fn hemisphere_line_names_the_active_sector() {
        assert_eq!(hemisphere_line(&view()), "Sector 2: FGHIJ");
        let idle = SessionView {
            active_sector: None,
            active_row: None,
            highlighted: None,
            ..view()
        };
        assert_eq!(hemisphere_line(&idle), "Hemisphere");
    }

    #[test]
    fn zoomed_row_highlights_cursor_cell() {
        let line = zoomed_row(&view());
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[1].content, " G ");
        assert_eq!(line.spans[1].style.bg, Some(HIGHLIGHT_COLOR));
        assert_eq!(line.spans[0].style.bg, None);
    }
}
