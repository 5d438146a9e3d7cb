use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use super::transport::Transport;

pub const STEAM_API_BASE: &str = "http://api.steampowered.com";
const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v0001/";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("Steam API returned {0}. Check your Steam API Key.")]
    Status(reqwest::StatusCode),
    #[error("Unexpected response from Steam: {0}")]
    Decode(String),
    #[error("No games found. Check: 1. Profile Privacy (Public?) 2. Steam ID")]
    NoGames,
}

/// Response from `IPlayerService/GetOwnedGames`
#[derive(Debug, Deserialize)]
struct OwnedGamesEnvelope {
    response: Option<OwnedGamesResponse>,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesResponse {
    games: Option<Vec<OwnedGame>>,
}

#[derive(Debug, Deserialize)]
struct OwnedGame {
    name: Option<String>,
}

/// Fetch the names of every game on the account, in the order Steam lists them
pub async fn fetch_owned_games(
    base_url: &str,
    steam_id: &str,
    api_key: &str,
    transport: &Transport,
) -> Result<Vec<String>, FetchError> {
    let url = owned_games_url(base_url, steam_id, api_key)?;
    let client = transport
        .client(Some(FETCH_TIMEOUT))
        .map_err(transport_error)?;

    let response = client.get(url).send().await.map_err(transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        tracing::warn!(%status, "Steam rejected owned-games request");
        return Err(FetchError::Status(status));
    }

    parse_owned_games(&body)
}

/// reqwest puts the request URL in its messages, and ours carries the API key
fn transport_error(e: reqwest::Error) -> FetchError {
    let e = e.without_url();
    let mut message = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    FetchError::Transport(message)
}

fn owned_games_url(base_url: &str, steam_id: &str, api_key: &str) -> Result<Url, FetchError> {
    let endpoint = format!("{}{}", base_url.trim_end_matches('/'), OWNED_GAMES_PATH);
    Url::parse_with_params(
        &endpoint,
        [
            ("key", api_key),
            ("steamid", steam_id),
            ("format", "json"),
            ("include_appinfo", "1"),
            ("include_played_free_games", "1"),
        ],
    )
    .map_err(|e| FetchError::Transport(e.to_string()))
}

fn parse_owned_games(body: &str) -> Result<Vec<String>, FetchError> {
    let envelope: OwnedGamesEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let games = envelope
        .response
        .and_then(|r| r.games)
        .ok_or(FetchError::NoGames)?;

    Ok(games.into_iter().filter_map(|g| g.name).collect())
}
