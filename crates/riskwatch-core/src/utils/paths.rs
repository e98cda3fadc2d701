use std::path::PathBuf;

/// Standardized application directories for riskwatch.
pub struct AppPaths;

impl AppPaths {
    /// Return the user-level config directory (platform-specific)
    pub fn user_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "riskwatch").map(|d| d.config_dir().to_path_buf())
    }

    /// Return the user-level data directory (platform-specific)
    pub fn user_data_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "riskwatch").map(|d| d.data_dir().to_path_buf())
    }

    /// Directory holding file-backed credentials, falling back to ~/.riskwatch
    pub fn token_dir() -> Option<PathBuf> {
        Self::user_data_dir().or_else(|| dirs::home_dir().map(|home| home.join(".riskwatch")))
    }

    pub fn settings_file() -> Option<PathBuf> {
        Self::user_config_dir().map(|d| d.join("settings.toml"))
    }
}
