use clap::Parser;
use eyre::Result;

use riskwatch::cli::{Cli, Commands};
use riskwatch::commands::{
    Command, CommandContext, login::LoginCommand, logout::LogoutCommand,
    messages::MessagesCommand, settings::SettingsCommand, token::TokenCommand,
};
use riskwatch_core::config::Settings;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load .env before clap reads env-backed flags
    riskwatch::cli::config::load_env()?;

    let cli = Cli::parse();

    riskwatch::cli::config::init_tracing(cli.debug)?;

    let settings = resolve_settings(&cli)?;
    debug!(api_url = %settings.api_url, storage = %settings.token_storage, "settings resolved");

    let context = CommandContext::new(settings);
    let command: Box<dyn Command + Send + Sync> = match cli.command {
        Commands::Login { token } => Box::new(LoginCommand { context, token }),
        Commands::Logout => Box::new(LogoutCommand { context }),
        Commands::Token { reveal } => Box::new(TokenCommand { context, reveal }),
        Commands::Messages {
            filters,
            json,
            token,
        } => Box::new(MessagesCommand {
            context,
            filters,
            json,
            token,
        }),
        Commands::Settings { action } => Box::new(SettingsCommand { context, action }),
    };

    command.execute().await
}

/// Settings file, then `RISKWATCH_*` environment, then explicit flags.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load_or_default().with_env_overrides()?;

    if let Some(api_url) = &cli.api_url {
        settings.api_url.clone_from(api_url);
    }
    if let Some(storage) = cli.storage {
        settings.token_storage = storage;
    }

    settings.validate()?;
    Ok(settings)
}
