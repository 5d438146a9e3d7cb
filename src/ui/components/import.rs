use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;

use super::util::{centered_rect, text_with_cursor};

/// Path prompt for importing the query from a text file
pub fn render_import(frame: &mut Frame, app: &App, area: Rect) {
    let Some(path) = &app.import_path else {
        return;
    };

    let popup_area = centered_rect(70, 25, area);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("Path to a .txt file:"), Line::from("")];
    lines.extend(text_with_cursor(
        path,
        Some(app.cursor_pos),
        Style::default().fg(Color::White),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Import Prompt ");

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup_area,
    );
}
