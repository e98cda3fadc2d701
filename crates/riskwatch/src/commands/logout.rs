use super::{Command, CommandContext};
use crate::error::Error;
use async_trait::async_trait;
use eyre::Result;
use std::io::Write;

pub struct LogoutCommand {
    pub context: CommandContext,
}

#[async_trait]
impl Command for LogoutCommand {
    async fn execute(&self) -> Result<()> {
        self.logout().await.map_err(Into::into)
    }
}

impl LogoutCommand {
    async fn logout(&self) -> std::result::Result<(), Error> {
        self.context
            .token_store()?
            .remove_stored_auth_token()
            .await?;
        writeln!(std::io::stdout(), "Access token removed.")?;
        Ok(())
    }
}
