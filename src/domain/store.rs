use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use super::types::Configuration;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// JSON-backed configuration file living in a fixed app directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Read the stored configuration. A missing file is not an error.
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        let path = self.path();
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Configuration::default()),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Write the configuration, creating the app directory if needed.
    /// Returns the path written.
    pub fn save(&self, config: &Configuration) -> Result<PathBuf, ConfigError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ConfigError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path();
        let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
