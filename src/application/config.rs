// src/application/config.rs
//
// Client configuration
//
// Precedence (lowest first):
//   built-in defaults < JSON file < LOR_SCORER_URL < command line flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::integrations::HttpScoringClient;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const URL_ENV_VAR: &str = "LOR_SCORER_URL";

const CONFIG_DIR_NAME: &str = "lor-scorer";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the scoring service
    pub base_url: String,

    /// Optional client-side timeout. None waits for the transport to finish.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// `<config_dir>/lor-scorer/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist; the default path is used only if present.
    pub fn load(
        path: Option<&Path>,
        env_url: Option<String>,
        flag_url: Option<String>,
    ) -> AppResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(default) => {
                    log::debug!("Loading config from {}", default.display());
                    Self::from_file(&default)?
                }
                None => Self::default(),
            },
        };

        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(url) = flag_url {
            config.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        HttpScoringClient::endpoint_for(&self.base_url)?;
        if self.request_timeout_secs == Some(0) {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
