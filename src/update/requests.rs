use std::path::MAIN_SEPARATOR;

use crate::app::{App, AppState};
use crate::command::Command;
use crate::config::AppConfig;
use crate::domain::types::{RecommendationRequest, parse_count};

use super::helpers;

pub fn start_fetch(app: &mut App) -> Vec<Command> {
    if !app.can_fetch() {
        return Vec::new();
    }

    let steam_id = app.config.steam_id.trim().to_string();
    let api_key = app.config.steam_api_key.trim().to_string();
    if steam_id.is_empty() || api_key.is_empty() {
        app.notify_error("Please enter both Steam ID and Steam API Key.");
        return Vec::new();
    }

    let transport = helpers::transport_for(app);
    app.state = AppState::LibraryLoading;
    app.status = "Fetching library from Steam...".to_string();

    vec![Command::FetchLibrary {
        steam_id,
        api_key,
        transport,
    }]
}

pub fn start_recommend(app: &mut App, config: &AppConfig) -> Vec<Command> {
    if !app.can_recommend() {
        return Vec::new();
    }

    let api_key = app.config.model_api_key.trim().to_string();
    if api_key.is_empty() {
        app.notify_error("Please enter your Gemini API Key.");
        return Vec::new();
    }

    let user_query = app.query.trim().to_string();
    if user_query.is_empty() {
        app.notify_error("Please explain what kind of game you want.");
        return Vec::new();
    }

    let request = RecommendationRequest {
        game_names: app.games.clone(),
        user_query,
        count: parse_count(&app.count_input),
    };

    let transport = helpers::transport_for(app);
    let model = &config.model.model;
    app.state = AppState::Recommending;
    app.result = format!("Thinking using {}... (Check Proxy if stuck)", model);
    app.result_scroll = 0;
    app.status = format!("Sending data to {}...", model);

    vec![Command::Recommend {
        api_key,
        request,
        transport,
    }]
}

pub fn save_config(app: &mut App) -> Vec<Command> {
    app.status = "Saving configuration...".to_string();
    vec![Command::SaveConfig {
        config: app.config.trimmed(),
    }]
}

pub fn open_import(app: &mut App, config: &AppConfig) {
    let mut start = config.config_dir.display().to_string();
    if !start.ends_with(MAIN_SEPARATOR) {
        start.push(MAIN_SEPARATOR);
    }
    app.open_import(start);
}
