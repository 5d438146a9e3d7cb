use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::config::AppConfig;

use super::components::{form, header, import, keybindings, notification, request, results};

/// Main render function
pub fn render(frame: &mut Frame, app: &App, config: &AppConfig) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Length(7),  // Configuration form
            Constraint::Length(9),  // Query + count
            Constraint::Min(5),     // Recommendations
            Constraint::Length(2),  // Keybindings bar
        ])
        .split(size);

    header::render_header(frame, config, chunks[0]);
    form::render_form(frame, app, chunks[1]);
    request::render_request(frame, app, chunks[2]);
    results::render_results(frame, app, chunks[3]);
    keybindings::render_keybindings(frame, app, chunks[4]);

    if app.import_path.is_some() {
        import::render_import(frame, app, size);
    }
    if let Some(note) = &app.notification {
        notification::render_notification(frame, note, size);
    }
}
