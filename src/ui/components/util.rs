use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, Field};

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Field contents as displayed: secrets masked, cursor shown when focused
pub fn field_lines(app: &App, field: Field, style: Style) -> Vec<Line<'static>> {
    let text = app.field_text(field);
    let shown = if field.is_secret() {
        "*".repeat(text.chars().count())
    } else {
        text.to_string()
    };
    let cursor = (app.focus == field && app.import_path.is_none()).then_some(app.cursor_pos);
    text_with_cursor(&shown, cursor, style)
}

/// Split text into lines, drawing the cursor as a reversed cell
pub fn text_with_cursor(text: &str, cursor: Option<usize>, style: Style) -> Vec<Line<'static>> {
    let cursor_style = style.add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut buf = String::new();

    for (i, c) in text.chars().enumerate() {
        if Some(i) == cursor {
            spans.push(Span::styled(std::mem::take(&mut buf), style));
            let shown = if c == '\n' { ' ' } else { c };
            spans.push(Span::styled(shown.to_string(), cursor_style));
            if c == '\n' {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            continue;
        }
        if c == '\n' {
            spans.push(Span::styled(std::mem::take(&mut buf), style));
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            buf.push(c);
        }
    }

    spans.push(Span::styled(buf, style));
    if cursor.is_some_and(|pos| pos >= text.chars().count()) {
        spans.push(Span::styled(" ", cursor_style));
    }
    lines.push(Line::from(spans));
    lines
}
