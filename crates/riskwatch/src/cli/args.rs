use clap::{Parser, Subcommand};
use riskwatch_core::app::domain::FilterParams;
use riskwatch_core::auth::TokenStorageKind;
use riskwatch_core::config::{API_URL_ENV, TOKEN_STORAGE_ENV};

/// Fetch and inspect risk indicator messages.
#[derive(Parser)]
#[command(version, about, long_about = None, author)]
pub struct Cli {
    /// API base URL (defaults to the staging API)
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Where the access token is kept
    #[arg(long, global = true, env = TOKEN_STORAGE_ENV, value_parser = parse_storage_kind)]
    pub storage: Option<TokenStorageKind>,

    /// Enable debug logging for riskwatch
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Store an access token
    Login {
        /// Token to store; prompted for when omitted
        #[arg(long)]
        token: Option<String>,
    },
    /// Remove the stored access token
    Logout,
    /// Report whether an access token is stored
    Token {
        /// Print the token itself
        #[arg(long)]
        reveal: bool,
    },
    /// Fetch indicator messages
    Messages {
        /// Filter as name=value; repeatable
        #[arg(short, long = "filter", value_name = "NAME=VALUE")]
        filters: Vec<FilterParams>,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
        /// Use this token instead of the stored one
        #[arg(long, env = "RISKWATCH_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
    /// Inspect settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
}

#[derive(Subcommand, Clone)]
pub enum SettingsCommands {
    /// Show effective settings
    Show,
    /// Print the settings file path
    Path,
}

fn parse_storage_kind(value: &str) -> Result<TokenStorageKind, String> {
    value
        .trim()
        .to_ascii_lowercase()
        .parse()
        .map_err(|_| format!("unknown storage {value:?}, expected keyring or file"))
}
