use std::path::PathBuf;

use crate::domain::llm::ModelEndpoint;

/// Runtime settings, fixed for the life of the process
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding config.json and the log file
    pub config_dir: PathBuf,
    pub steam_base_url: String,
    pub model: ModelEndpoint,
}
