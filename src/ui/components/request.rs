use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Field};

use super::util::field_lines;

pub fn render_request(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let query_focused = app.focus == Field::Query && app.import_path.is_none();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if query_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }))
        .title(format!(" {} ", Field::Query.label()));

    let query = Paragraph::new(field_lines(app, Field::Query, Style::default().fg(Color::White)))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(query, chunks[0]);

    let count_focused = app.focus == Field::Count && app.import_path.is_none();
    let mut spans = vec![Span::styled(
        format!(" {}: ", Field::Count.label()),
        if count_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        },
    )];
    if let Some(value) = field_lines(app, Field::Count, Style::default().fg(Color::White))
        .into_iter()
        .next()
    {
        spans.extend(value.spans);
    }

    let (label, color) = if app.can_recommend() {
        ("  [Ctrl+R] Get AI Recommendations", Color::Green)
    } else {
        ("  Recommendations unavailable until a library is loaded", Color::DarkGray)
    };
    spans.push(Span::styled(label, Style::default().fg(color)));

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}
