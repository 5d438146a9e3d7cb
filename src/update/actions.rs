use std::path::PathBuf;

use crate::app::{App, AppState};
use crate::command::Command;
use crate::domain::steam::FetchError;

pub fn handle_library_loaded(app: &mut App, result: Result<Vec<String>, String>) -> Vec<Command> {
    match result {
        Ok(games) if !games.is_empty() => {
            let message = format!("Successfully loaded {} games.", games.len());
            app.games = games;
            app.state = AppState::LibraryReady;
            app.status = message.clone();
            app.notify_info(message);
        }
        Ok(_) => library_failed(app, FetchError::NoGames.to_string()),
        Err(err) => library_failed(app, err),
    }
    Vec::new()
}

/// A failed refresh keeps whatever library was already loaded
fn library_failed(app: &mut App, err: String) {
    app.state = if app.games.is_empty() {
        AppState::Idle
    } else {
        AppState::LibraryReady
    };
    app.status = err.clone();
    app.notify_error(err);
}

pub fn handle_recommendation_ready(app: &mut App, result: Result<String, String>) -> Vec<Command> {
    match result {
        Ok(text) => {
            app.result = text;
            app.status = "Recommendation complete.".to_string();
            app.notify_info("Recommendation complete.");
        }
        Err(err) => {
            app.result = format!(
                "Error from AI: {}\n\nTip: If this is a connection error, try verifying your Proxy URL.",
                err
            );
            app.status = "Error occurred.".to_string();
            app.notify_error(format!("Error from AI: {}", err));
        }
    }
    app.result_scroll = 0;
    app.state = AppState::LibraryReady;
    Vec::new()
}

pub fn handle_config_saved(app: &mut App, result: Result<PathBuf, String>) -> Vec<Command> {
    match result {
        Ok(path) => {
            let message = format!("Configuration saved to {}", path.display());
            app.status = message.clone();
            app.notify_info(message);
        }
        Err(err) => {
            app.status = "Could not save config.".to_string();
            app.notify_error(format!("Could not save config: {}", err));
        }
    }
    Vec::new()
}

pub fn handle_prompt_imported(app: &mut App, result: Result<String, String>) -> Vec<Command> {
    match result {
        Ok(text) => {
            app.set_query(text);
            app.status = "Prompt imported.".to_string();
        }
        Err(err) => {
            app.status = "Import failed.".to_string();
            app.notify_error(format!("Could not read file: {}", err));
        }
    }
    Vec::new()
}
