use std::path::PathBuf;

use crate::action::Action;
use crate::config::AppConfig;
use crate::domain::store::ConfigStore;
use crate::domain::transport::Transport;
use crate::domain::types::{Configuration, RecommendationRequest};
use crate::domain::{llm, steam};

#[derive(Debug)]
pub enum Command {
    FetchLibrary {
        steam_id: String,
        api_key: String,
        transport: Transport,
    },
    Recommend {
        api_key: String,
        request: RecommendationRequest,
        transport: Transport,
    },
    SaveConfig { config: Configuration },
    ImportPrompt { path: PathBuf },
}

pub async fn execute_command(command: Command, config: &AppConfig) -> Option<Action> {
    match command {
        Command::FetchLibrary {
            steam_id,
            api_key,
            transport,
        } => {
            tracing::info!(%steam_id, proxy = ?transport.proxy_for_log(), "fetching owned games");
            let result =
                steam::fetch_owned_games(&config.steam_base_url, &steam_id, &api_key, &transport)
                    .await;
            match &result {
                Ok(games) => tracing::info!(count = games.len(), "library loaded"),
                Err(e) => tracing::warn!(error = %e, "library fetch failed"),
            }
            Some(Action::LibraryLoaded(result.map_err(|e| e.to_string())))
        }
        Command::Recommend {
            api_key,
            request,
            transport,
        } => {
            tracing::info!(
                model = %config.model.model,
                games = request.game_names.len(),
                count = request.count,
                proxy = ?transport.proxy_for_log(),
                "requesting recommendations"
            );
            let result = llm::recommend(&config.model, &api_key, &request, &transport).await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "recommendation failed");
            }
            Some(Action::RecommendationReady(result.map_err(|e| e.to_string())))
        }
        Command::SaveConfig { config: values } => {
            let store = ConfigStore::new(&config.config_dir);
            let result = tokio::task::spawn_blocking(move || store.save(&values))
                .await
                .map_err(|e| e.to_string())
                .and_then(|saved| saved.map_err(|e| e.to_string()));
            match &result {
                Ok(path) => tracing::info!(path = %path.display(), "configuration saved"),
                Err(e) => tracing::error!(error = %e, "could not save configuration"),
            }
            Some(Action::ConfigSaved(result))
        }
        Command::ImportPrompt { path } => {
            let result = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| format!("{}: {}", path.display(), e));
            Some(Action::PromptImported(result))
        }
    }
}
