use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::command::Command;
use crate::config::AppConfig;

use super::{helpers, requests};

pub fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    config: &AppConfig,
) -> Vec<Command> {
    if helpers::is_quit(code, modifiers) {
        app.should_quit = true;
        return Vec::new();
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('l') => requests::start_fetch(app),
            KeyCode::Char('r') => requests::start_recommend(app, config),
            KeyCode::Char('s') => requests::save_config(app),
            KeyCode::Char('o') => {
                requests::open_import(app, config);
                Vec::new()
            }
            _ => Vec::new(),
        };
    }

    match code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter if app.focus.is_multiline() => app.insert_char('\n'),
        KeyCode::Enter => app.focus_next(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_pos = 0,
        KeyCode::End => app.cursor_to_end(),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
    Vec::new()
}
