use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::AppConfig;

/// Render the title bar with the model in use
pub fn render_header(frame: &mut Frame, config: &AppConfig, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Steam Library AI Recommender",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(config.model.model.clone(), Style::default().fg(Color::White)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}
