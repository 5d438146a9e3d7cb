use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::command::Command;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    if helpers::is_quit(code, modifiers) {
        app.should_quit = true;
        return Vec::new();
    }

    match code {
        KeyCode::Esc => {
            app.close_import();
            Vec::new()
        }
        KeyCode::Enter => {
            let path = app
                .import_path
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string();
            app.close_import();
            if path.is_empty() {
                return Vec::new();
            }
            app.status = "Importing prompt...".to_string();
            vec![Command::ImportPrompt {
                path: PathBuf::from(path),
            }]
        }
        KeyCode::Backspace => {
            app.delete_char();
            Vec::new()
        }
        KeyCode::Left => {
            app.cursor_left();
            Vec::new()
        }
        KeyCode::Right => {
            app.cursor_right();
            Vec::new()
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}
