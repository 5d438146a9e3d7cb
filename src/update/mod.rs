mod actions;
mod form;
mod helpers;
mod import;
mod notification;
mod requests;

use crate::action::Action;
use crate::app::App;
use crate::command::Command;
use crate::config::AppConfig;

pub fn update(app: &mut App, action: Action, config: &AppConfig) -> Vec<Command> {
    match action {
        Action::Input { code, modifiers } => {
            if app.notification.is_some() {
                notification::handle_input(app, code, modifiers)
            } else if app.import_path.is_some() {
                import::handle_input(app, code, modifiers)
            } else {
                form::handle_input(app, code, modifiers, config)
            }
        }
        Action::LibraryLoaded(result) => actions::handle_library_loaded(app, result),
        Action::RecommendationReady(result) => actions::handle_recommendation_ready(app, result),
        Action::ConfigSaved(result) => actions::handle_config_saved(app, result),
        Action::PromptImported(result) => actions::handle_prompt_imported(app, result),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::app::{AppState, Field, NotificationKind};
    use crate::domain::llm::ModelEndpoint;
    use crate::domain::types::Configuration;

    fn config() -> AppConfig {
        AppConfig {
            config_dir: PathBuf::from("Config"),
            steam_base_url: "http://steam.invalid".to_string(),
            model: ModelEndpoint::default(),
        }
    }

    fn ctrl(c: char) -> Action {
        Action::Input {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    fn key(code: KeyCode) -> Action {
        Action::Input {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn filled_app() -> App {
        App::new(Configuration {
            steam_id: "76561198000000000".to_string(),
            steam_api_key: "K1".to_string(),
            model_api_key: "K2".to_string(),
            proxy_url: String::new(),
        })
    }

    fn loaded_app() -> App {
        let mut app = filled_app();
        let cfg = config();
        update(&mut app, ctrl('l'), &cfg);
        update(
            &mut app,
            Action::LibraryLoaded(Ok(vec!["Fallout 4".to_string(), "Outer Worlds".to_string()])),
            &cfg,
        );
        app.notification = None;
        app
    }

    #[test]
    fn fetch_requires_id_and_key() {
        let mut app = App::default();
        let commands = update(&mut app, ctrl('l'), &config());

        assert!(commands.is_empty());
        assert_eq!(app.state, AppState::Idle);
        let note = app.notification.unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Please enter both Steam ID and Steam API Key.");
    }

    #[test]
    fn fetch_enters_loading_and_issues_request() {
        let mut app = filled_app();
        let commands = update(&mut app, ctrl('l'), &config());

        assert_eq!(app.state, AppState::LibraryLoading);
        assert_eq!(app.status, "Fetching library from Steam...");
        assert!(matches!(
            commands.as_slice(),
            [Command::FetchLibrary { steam_id, api_key, transport }]
                if steam_id == "76561198000000000" && api_key == "K1" && transport.proxy.is_none()
        ));

        // Control stays disabled while in flight
        assert!(update(&mut app, ctrl('l'), &config()).is_empty());
        assert!(update(&mut app, ctrl('r'), &config()).is_empty());
    }

    #[test]
    fn successful_fetch_enables_recommend() {
        let mut app = filled_app();
        assert!(!app.can_recommend());

        update(&mut app, ctrl('l'), &config());
        update(
            &mut app,
            Action::LibraryLoaded(Ok(vec!["A".to_string(), "B".to_string()])),
            &config(),
        );

        assert_eq!(app.state, AppState::LibraryReady);
        assert!(app.can_recommend());
        assert_eq!(app.games, vec!["A", "B"]);
        assert_eq!(app.status, "Successfully loaded 2 games.");
        assert_eq!(app.notification.unwrap().kind, NotificationKind::Info);
    }

    #[test]
    fn failed_fetch_returns_to_idle() {
        let mut app = filled_app();
        update(&mut app, ctrl('l'), &config());
        update(
            &mut app,
            Action::LibraryLoaded(Err("connection refused".to_string())),
            &config(),
        );

        assert_eq!(app.state, AppState::Idle);
        assert!(!app.can_recommend());
        assert!(app.can_fetch());
        assert_eq!(app.status, "connection refused");
    }

    #[test]
    fn empty_library_keeps_recommend_disabled() {
        let mut app = filled_app();
        update(&mut app, ctrl('l'), &config());
        update(&mut app, Action::LibraryLoaded(Ok(Vec::new())), &config());

        assert_eq!(app.state, AppState::Idle);
        assert!(!app.can_recommend());
        assert!(app.status.starts_with("No games found."));
    }

    #[test]
    fn failed_refresh_keeps_previous_library() {
        let mut app = loaded_app();
        update(&mut app, ctrl('l'), &config());
        update(&mut app, Action::LibraryLoaded(Err("timed out".to_string())), &config());

        assert_eq!(app.state, AppState::LibraryReady);
        assert_eq!(app.games, vec!["Fallout 4", "Outer Worlds"]);
    }

    #[test]
    fn recommend_is_unreachable_before_library() {
        let mut app = filled_app();
        let commands = update(&mut app, ctrl('r'), &config());

        assert!(commands.is_empty());
        assert_eq!(app.state, AppState::Idle);
    }

    #[test]
    fn recommend_requires_model_key_and_query() {
        let mut app = loaded_app();
        app.config.model_api_key = "  ".to_string();
        assert!(update(&mut app, ctrl('r'), &config()).is_empty());
        assert_eq!(
            app.notification.take().unwrap().message,
            "Please enter your Gemini API Key."
        );

        app.config.model_api_key = "K2".to_string();
        app.query = "\n ".to_string();
        assert!(update(&mut app, ctrl('r'), &config()).is_empty());
        assert_eq!(
            app.notification.take().unwrap().message,
            "Please explain what kind of game you want."
        );
        assert_eq!(app.state, AppState::LibraryReady);
    }

    #[test]
    fn recommend_uses_latest_library_and_count() {
        let mut app = loaded_app();
        app.query = "adventure".to_string();
        app.count_input = "1".to_string();

        let commands = update(&mut app, ctrl('r'), &config());

        assert_eq!(app.state, AppState::Recommending);
        assert_eq!(
            app.result,
            "Thinking using gemini-3-flash-preview... (Check Proxy if stuck)"
        );
        assert!(matches!(
            commands.as_slice(),
            [Command::Recommend { api_key, request, .. }]
                if api_key == "K2"
                    && request.game_names == ["Fallout 4", "Outer Worlds"]
                    && request.user_query == "adventure"
                    && request.count == 1
        ));
    }

    #[test]
    fn invalid_count_falls_back_to_five() {
        for input in ["0", "many"] {
            let mut app = loaded_app();
            app.count_input = input.to_string();
            let commands = update(&mut app, ctrl('r'), &config());
            assert!(matches!(
                commands.as_slice(),
                [Command::Recommend { request, .. }] if request.count == 5
            ));
        }
    }

    #[test]
    fn recommendation_text_is_shown_verbatim() {
        let mut app = loaded_app();
        update(&mut app, ctrl('r'), &config());
        update(
            &mut app,
            Action::RecommendationReady(Ok("**Outer Worlds** - companions galore".to_string())),
            &config(),
        );

        assert_eq!(app.result, "**Outer Worlds** - companions galore");
        assert_eq!(app.status, "Recommendation complete.");
        assert_eq!(app.state, AppState::LibraryReady);
        assert!(app.can_recommend());
    }

    #[test]
    fn recommendation_error_shows_proxy_hint_and_reenables() {
        let mut app = loaded_app();
        update(&mut app, ctrl('r'), &config());
        update(
            &mut app,
            Action::RecommendationReady(Err("quota exceeded".to_string())),
            &config(),
        );

        assert!(app.result.starts_with("Error from AI: quota exceeded"));
        assert!(app.result.contains("try verifying your Proxy URL"));
        assert_eq!(app.status, "Error occurred.");
        assert_eq!(app.state, AppState::LibraryReady);
        assert_eq!(app.games.len(), 2);
    }

    #[test]
    fn proxy_field_is_snapshotted_per_request() {
        let mut app = filled_app();
        app.config.proxy_url = "http://127.0.0.1:7890".to_string();
        let commands = update(&mut app, ctrl('l'), &config());
        assert!(matches!(
            commands.as_slice(),
            [Command::FetchLibrary { transport, .. }]
                if transport.proxy.as_deref() == Some("http://127.0.0.1:7890")
        ));

        update(&mut app, Action::LibraryLoaded(Ok(vec!["A".to_string()])), &config());
        app.notification = None;
        app.config.proxy_url.clear();
        let commands = update(&mut app, ctrl('r'), &config());
        assert!(matches!(
            commands.as_slice(),
            [Command::Recommend { transport, .. }] if transport.proxy.is_none()
        ));
    }

    #[test]
    fn notification_swallows_next_key() {
        let mut app = App::default();
        app.notify_info("hello");
        let before = app.config.steam_id.clone();

        update(&mut app, key(KeyCode::Char('x')), &config());

        assert!(app.notification.is_none());
        assert_eq!(app.config.steam_id, before);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut app = App::default();
        for c in "765".chars() {
            update(&mut app, key(KeyCode::Char(c)), &config());
        }
        update(&mut app, key(KeyCode::Enter), &config());
        update(&mut app, key(KeyCode::Char('k')), &config());

        assert_eq!(app.config.steam_id, "765");
        assert_eq!(app.focus, Field::SteamKey);
        assert_eq!(app.config.steam_api_key, "k");
    }

    #[test]
    fn save_sends_trimmed_configuration() {
        let mut app = filled_app();
        app.config.proxy_url = " http://p:1 ".to_string();
        let commands = update(&mut app, ctrl('s'), &config());

        assert!(matches!(
            commands.as_slice(),
            [Command::SaveConfig { config }] if config.proxy_url == "http://p:1"
        ));

        update(
            &mut app,
            Action::ConfigSaved(Ok(PathBuf::from("Config/config.json"))),
            &config(),
        );
        let note = app.notification.unwrap();
        assert_eq!(note.kind, NotificationKind::Info);
        assert!(note.message.starts_with("Configuration saved to Config"));
    }

    #[test]
    fn save_failure_is_reported() {
        let mut app = App::default();
        update(
            &mut app,
            Action::ConfigSaved(Err("permission denied".to_string())),
            &config(),
        );
        let note = app.notification.unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Could not save config: permission denied");
    }

    #[test]
    fn import_flow_replaces_query() {
        let mut app = App::default();
        update(&mut app, ctrl('o'), &config());
        assert!(app.import_path.as_deref().unwrap().starts_with("Config"));

        for c in "p.txt".chars() {
            update(&mut app, key(KeyCode::Char(c)), &config());
        }
        let commands = update(&mut app, key(KeyCode::Enter), &config());
        assert!(app.import_path.is_none());
        assert!(matches!(
            commands.as_slice(),
            [Command::ImportPrompt { path }] if path.ends_with("p.txt")
        ));

        update(
            &mut app,
            Action::PromptImported(Ok("cozy farming\n".to_string())),
            &config(),
        );
        assert_eq!(app.query, "cozy farming\n");
    }

    #[test]
    fn import_can_be_cancelled() {
        let mut app = App::default();
        update(&mut app, ctrl('o'), &config());
        let commands = update(&mut app, key(KeyCode::Esc), &config());
        assert!(commands.is_empty());
        assert!(app.import_path.is_none());
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::default();
        update(&mut app, ctrl('q'), &config());
        assert!(app.should_quit);
    }
}
