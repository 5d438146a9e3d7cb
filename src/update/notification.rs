use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::command::Command;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    if helpers::is_quit(code, modifiers) {
        app.should_quit = true;
    }
    app.notification = None;
    Vec::new()
}
