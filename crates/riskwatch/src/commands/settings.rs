use super::{Command, CommandContext};
use crate::cli::SettingsCommands;
use crate::error::Error;
use async_trait::async_trait;
use eyre::Result;
use riskwatch_core::config::Settings;
use std::io::Write;

pub struct SettingsCommand {
    pub context: CommandContext,
    pub action: SettingsCommands,
}

#[async_trait]
impl Command for SettingsCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            SettingsCommands::Show => self.show().map_err(Into::into),
            SettingsCommands::Path => self.path().map_err(Into::into),
        }
    }
}

impl SettingsCommand {
    fn show(&self) -> std::result::Result<(), Error> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", toml::to_string_pretty(&self.context.settings)?)?;
        Ok(())
    }

    fn path(&self) -> std::result::Result<(), Error> {
        let path = Settings::config_path()?;
        writeln!(std::io::stdout(), "{}", path.display())?;
        Ok(())
    }
}
