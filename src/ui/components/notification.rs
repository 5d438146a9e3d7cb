use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{Notification, NotificationKind};

use super::util::centered_rect;

pub fn render_notification(frame: &mut Frame, note: &Notification, area: Rect) {
    let (title, color) = match note.kind {
        NotificationKind::Info => (" Success ", Color::Green),
        NotificationKind::Error => (" Error ", Color::Red),
    };

    let popup_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            note.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup_area,
    );
}
