use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.result.lines().map(Line::from).collect();

    let title = if app.games.is_empty() {
        " Recommendations ".to_string()
    } else {
        format!(" Recommendations │ {} games in library ", app.games.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll, 0));

    frame.render_widget(paragraph, area);
}
