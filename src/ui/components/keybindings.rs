use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, AppState};

/// Render the keybindings bar at the bottom
pub fn render_keybindings(frame: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = if app.notification.is_some() {
        vec![("Any key", "Dismiss")]
    } else if app.import_path.is_some() {
        vec![("Enter", "Import"), ("Esc", "Cancel")]
    } else {
        let mut keys = vec![("Tab", "Next field")];
        match app.state {
            AppState::Idle => keys.push(("Ctrl+L", "Load Steam Library")),
            AppState::LibraryReady => {
                keys.push(("Ctrl+L", "Reload Library"));
                keys.push(("Ctrl+R", "Recommend"));
            }
            AppState::LibraryLoading => keys.push(("", "Loading library...")),
            AppState::Recommending => keys.push(("", "Thinking...")),
        }
        keys.extend([
            ("Ctrl+S", "Save Config"),
            ("Ctrl+O", "Import Prompt"),
            ("PgUp/PgDn", "Scroll"),
            ("Ctrl+Q", "Quit"),
        ]);
        keys
    };

    // Build the line with key highlights
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
