use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, AppState, Field};

use super::util::field_lines;

const LABEL_WIDTH: usize = 20;

pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for field in [Field::SteamId, Field::SteamKey, Field::ModelKey, Field::Proxy] {
        let focused = app.focus == field && app.import_path.is_none();
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![Span::styled(
            format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
            label_style,
        )];
        // Single-line fields only ever produce one line
        if let Some(value) = field_lines(app, field, Style::default().fg(Color::White))
            .into_iter()
            .next()
        {
            spans.extend(value.spans);
        }
        if let Some(hint) = field.hint() {
            spans.push(Span::styled(
                format!("  ({})", hint),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    let status_color = if app.is_busy() {
        Color::Yellow
    } else if app.state == AppState::LibraryReady {
        Color::Green
    } else {
        Color::DarkGray
    };
    lines.push(Line::from(Span::styled(
        app.status.clone(),
        Style::default().fg(status_color),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Configuration ");

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
