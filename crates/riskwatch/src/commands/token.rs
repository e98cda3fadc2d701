use super::{Command, CommandContext};
use crate::error::Error;
use async_trait::async_trait;
use eyre::Result;
use std::io::Write;

pub struct TokenCommand {
    pub context: CommandContext,
    pub reveal: bool,
}

#[async_trait]
impl Command for TokenCommand {
    async fn execute(&self) -> Result<()> {
        self.show().await.map_err(Into::into)
    }
}

impl TokenCommand {
    async fn show(&self) -> std::result::Result<(), Error> {
        let token = self
            .context
            .token_store()?
            .get_stored_access_token()
            .await?;

        let mut stdout = std::io::stdout();
        match token {
            Some(token) if self.reveal => writeln!(stdout, "{token}")?,
            Some(_) => writeln!(
                stdout,
                "An access token is stored ({}).",
                self.context.settings.token_storage
            )?,
            None => return Err(Error::MissingToken),
        }
        Ok(())
    }
}
