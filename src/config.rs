use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Endpoint used when neither the config file nor the environment names
/// one. Matches the extraction service's default local port.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

const API_URL_ENV: &str = "DEAL_UPLOADER_API_URL";
const DOWNLOAD_DIR_ENV: &str = "DEAL_UPLOADER_DOWNLOAD_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the extraction service, without the `/upload` path.
    pub api_url: String,
    /// Where result spreadsheets are written. Unset means the user's
    /// download folder.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            download_dir: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".deal_uploader"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Defaults, overlaid by the config file, overlaid by the
    /// environment.
    pub fn load() -> Config {
        Self::merge(
            Self::load_file(),
            env::var(API_URL_ENV).ok(),
            env::var(DOWNLOAD_DIR_ENV).ok(),
        )
    }

    fn load_file() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(
                    path = %config_path.display(),
                    error = %e,
                    "ignoring unparseable config file"
                );
                None
            }
        }
    }

    fn merge(file: Option<Config>, api_url: Option<String>, download_dir: Option<String>) -> Config {
        let mut config = file.unwrap_or_default();
        if let Some(url) = api_url {
            config.api_url = url;
        }
        if let Some(dir) = download_dir {
            config.download_dir = Some(PathBuf::from(dir));
        }
        config
    }

    /// Directory the export lands in. Falls back to the current
    /// directory when the platform has no download folder.
    pub fn resolve_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
