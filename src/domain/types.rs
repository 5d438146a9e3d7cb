use serde::{Deserialize, Serialize};

/// Number of recommendations asked for when the count field is unusable
pub const DEFAULT_COUNT: u32 = 5;

/// Persisted credentials and network settings.
///
/// Every key is optional on disk; a missing key reads back as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub steam_id: String,
    #[serde(rename = "steam_key")]
    pub steam_api_key: String,
    #[serde(rename = "gemini_key")]
    pub model_api_key: String,
    #[serde(rename = "proxy")]
    pub proxy_url: String,
}

impl Configuration {
    /// Copy with surrounding whitespace stripped from every field
    pub fn trimmed(&self) -> Self {
        Self {
            steam_id: self.steam_id.trim().to_string(),
            steam_api_key: self.steam_api_key.trim().to_string(),
            model_api_key: self.model_api_key.trim().to_string(),
            proxy_url: self.proxy_url.trim().to_string(),
        }
    }
}

/// Everything the model needs for one recommendation round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub game_names: Vec<String>,
    pub user_query: String,
    pub count: u32,
}

/// Parse the count field, falling back to [`DEFAULT_COUNT`] for zero or junk
pub fn parse_count(input: &str) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_COUNT)
}
