use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, IndicatorMessagesClient};
use crate::auth::{TokenStorageKind, TokenStore};
use crate::error::{Error, Result};
use crate::utils::paths::AppPaths;

pub const API_URL_ENV: &str = "RISKWATCH_API_URL";
pub const TOKEN_STORAGE_ENV: &str = "RISKWATCH_TOKEN_STORAGE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default)]
    pub token_storage: TokenStorageKind,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            token_storage: TokenStorageKind::default(),
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::settings_file().ok_or_else(|| {
            Error::Configuration("Could not determine config directory".to_string())
        })
    }

    /// Load settings from the default location. Any failure, including an
    /// unreadable file, is logged and replaced by defaults.
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!("{}. Using default settings.", e);
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to read settings file at {:?}: {}. Using defaults.",
                path,
                e
            );
            Self::default()
        })
    }

    /// A file that fails to parse is logged and replaced by defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        match toml::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse settings file at {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Configuration(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply `RISKWATCH_*` environment overrides.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from<F>(mut self, get_env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = get_env(API_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            self.api_url = url;
        }

        if let Some(kind) = get_env(TOKEN_STORAGE_ENV)
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
        {
            self.token_storage = kind.parse().map_err(|_| {
                Error::Configuration(format!("unknown token storage {kind:?} in {TOKEN_STORAGE_ENV}"))
            })?;
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Configuration(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client(&self) -> Result<IndicatorMessagesClient> {
        self.validate()?;
        Ok(IndicatorMessagesClient::with_base_url(&self.api_url)?.with_page_size(self.page_size))
    }

    pub fn token_store(&self) -> Result<TokenStore> {
        let dir = AppPaths::token_dir();
        Ok(TokenStore::new(self.token_storage.open(dir.as_deref())?))
    }
}
